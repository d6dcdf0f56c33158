//! # 能带能量文件加载
//!
//! 读取 `bandXXXX.out` 等空白分隔的数值表，从每个文件中取出一列能量，
//! 按文件顺序堆叠为二维矩阵，并由 eV 换算为 Hartree。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/{bands,plot}.rs` 使用
//! - 使用 `ndarray` 存储数值表

use crate::error::{BandanaError, Result};
use ndarray::{Array2, ArrayView1};
use std::fs;
use std::path::{Path, PathBuf};

/// 1 Hartree 对应的 eV 数（原子单位换算常数）
pub const HARTREE_TO_EV: f64 = 27.2113845;

/// 解析空白分隔的数值表；`#` 之后的内容视为注释，空行跳过
pub fn parse_table_content(content: &str, name: &str) -> Result<Array2<f64>> {
    let mut values: Vec<f64> = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut n_rows = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let row: Vec<f64> = line
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    BandanaError::malformed(name, i + 1, format!("invalid number '{}'", field))
                })
            })
            .collect::<Result<_>>()?;

        match n_cols {
            None => n_cols = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(BandanaError::malformed(
                    name,
                    i + 1,
                    format!("expected {} columns, found {}", n, row.len()),
                ));
            }
            _ => {}
        }

        values.extend(row);
        n_rows += 1;
    }

    Array2::from_shape_vec((n_rows, n_cols.unwrap_or(0)), values)
        .map_err(|e| BandanaError::ShapeMismatch(format!("{}: {}", name, e)))
}

/// 读取数值表文件
pub fn load_table(path: &Path) -> Result<Array2<f64>> {
    let content = fs::read_to_string(path).map_err(|e| BandanaError::from_read(path, e))?;
    parse_table_content(&content, &path.display().to_string())
}

/// 从每个表中取第 `column` 列的前 `limit` 行，换算为 Hartree 并按行堆叠。
///
/// `tables` 中的名称仅用于错误信息。
pub fn stack_band_columns(
    tables: &[(String, Array2<f64>)],
    column: usize,
    limit: Option<usize>,
) -> Result<Array2<f64>> {
    if tables.is_empty() {
        return Err(BandanaError::InvalidArgument(
            "no band files to stack".to_string(),
        ));
    }

    let mut n_points: Option<usize> = None;
    let mut values: Vec<f64> = Vec::new();

    for (name, table) in tables {
        let (rows, cols) = table.dim();
        if column >= cols {
            return Err(BandanaError::ShapeMismatch(format!(
                "{}: column {} requested but table has {} columns",
                name, column, cols
            )));
        }

        let end = match limit {
            Some(limit) if limit > rows => {
                return Err(BandanaError::ShapeMismatch(format!(
                    "{}: {} rows requested but table has {}",
                    name, limit, rows
                )));
            }
            Some(limit) => limit,
            None => rows,
        };

        match n_points {
            None => n_points = Some(end),
            Some(n) if n != end => {
                return Err(BandanaError::ShapeMismatch(format!(
                    "{}: {} rows, previous files have {}",
                    name, end, n
                )));
            }
            _ => {}
        }

        let energies: ArrayView1<f64> = table.column(column);
        values.extend(energies.iter().take(end).map(|e| e / HARTREE_TO_EV));
    }

    Array2::from_shape_vec((tables.len(), n_points.unwrap_or(0)), values)
        .map_err(|e| BandanaError::ShapeMismatch(e.to_string()))
}

/// 加载能带文件并堆叠为 (文件数 × 采样点数) 的能量矩阵 (Hartree)
pub fn load_band_energies(
    files: &[PathBuf],
    column: usize,
    limit: Option<usize>,
) -> Result<Array2<f64>> {
    load_band_energies_with_progress(files, column, limit, |_| {})
}

/// 同 [`load_band_energies`]，每读完一个文件调用一次 `on_file`
pub fn load_band_energies_with_progress<F>(
    files: &[PathBuf],
    column: usize,
    limit: Option<usize>,
    mut on_file: F,
) -> Result<Array2<f64>>
where
    F: FnMut(&Path),
{
    let mut tables = Vec::with_capacity(files.len());
    for path in files {
        tables.push((path.display().to_string(), load_table(path)?));
        on_file(path);
    }

    stack_band_columns(&tables, column, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, content: &str) -> (String, Array2<f64>) {
        (name.to_string(), parse_table_content(content, name).unwrap())
    }

    #[test]
    fn test_parse_table() {
        let t = parse_table_content("# k  E\n1 0.1 -2.0\n\n2 0.2 -1.5\n", "band").unwrap();
        assert_eq!(t.dim(), (2, 3));
        assert!((t[[1, 2]] + 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_table_inline_comment() {
        let t = parse_table_content("1 2 3 # k-point\n4 5 6#\n   # note\n", "band").unwrap();
        assert_eq!(t.dim(), (2, 3));
        assert_eq!(t[[0, 2]], 3.0);
        assert_eq!(t[[1, 0]], 4.0);
    }

    #[test]
    fn test_parse_table_ragged() {
        let err = parse_table_content("1 2 3\n4 5\n", "band").unwrap_err();
        assert!(matches!(err, BandanaError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_parse_table_bad_number() {
        let err = parse_table_content("1 2 x\n", "band").unwrap_err();
        assert!(matches!(err, BandanaError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_stack_two_single_column_files() {
        let tables = vec![table("a", "1.0\n2.0\n3.0\n"), table("b", "4.0\n5.0\n6.0\n")];
        let band = stack_band_columns(&tables, 0, None).unwrap();

        assert_eq!(band.dim(), (2, 3));
        for (i, expected) in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].iter().enumerate() {
            let got = band[[i / 3, i % 3]];
            assert!((got - expected / HARTREE_TO_EV).abs() < 1e-15);
        }
    }

    #[test]
    fn test_stack_with_limit() {
        let tables = vec![
            table("a", "0 1.0\n0 2.0\n0 3.0\n"),
            table("b", "0 4.0\n0 5.0\n0 6.0\n0 7.0\n"),
        ];
        let band = stack_band_columns(&tables, 1, Some(2)).unwrap();
        assert_eq!(band.dim(), (2, 2));
        assert!((band[[1, 1]] * HARTREE_TO_EV - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_stack_limit_exceeds_rows() {
        let tables = vec![table("a", "1.0\n2.0\n")];
        let err = stack_band_columns(&tables, 0, Some(5)).unwrap_err();
        assert!(matches!(err, BandanaError::ShapeMismatch(_)));
    }

    #[test]
    fn test_stack_differing_lengths() {
        let tables = vec![table("a", "1.0\n2.0\n"), table("b", "1.0\n2.0\n3.0\n")];
        let err = stack_band_columns(&tables, 0, None).unwrap_err();
        assert!(matches!(err, BandanaError::ShapeMismatch(_)));
    }

    #[test]
    fn test_stack_missing_column() {
        let tables = vec![table("a", "1.0 2.0\n")];
        let err = stack_band_columns(&tables, 2, None).unwrap_err();
        assert!(matches!(err, BandanaError::ShapeMismatch(_)));
    }

    #[test]
    fn test_stack_empty_input() {
        assert!(stack_band_columns(&[], 0, None).is_err());
    }

    #[test]
    fn test_load_band_energies_from_files() {
        let dir = std::env::temp_dir().join(format!("bandana-bands-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let a = dir.join("band1001.out");
        let b = dir.join("band1002.out");
        fs::write(&a, "1 0.0 0.0 0.0 2.0 -5.0\n2 0.1 0.0 0.0 2.0 -4.0\n").unwrap();
        fs::write(&b, "1 0.0 0.1 0.0 2.0 -3.0\n2 0.1 0.1 0.0 2.0 -2.0\n").unwrap();

        let mut seen = 0;
        let band =
            load_band_energies_with_progress(&[a.clone(), b.clone()], 5, None, |_| seen += 1)
                .unwrap();
        assert_eq!(seen, 2);
        assert_eq!(band.dim(), (2, 2));
        assert!((band[[0, 0]] * HARTREE_TO_EV + 5.0).abs() < 1e-12);
        assert!((band[[1, 1]] * HARTREE_TO_EV + 2.0).abs() < 1e-12);

        let missing = dir.join("band9999.out");
        let err = load_band_energies(&[a, missing], 5, None).unwrap_err();
        assert!(matches!(err, BandanaError::FileNotFound { .. }));

        fs::remove_dir_all(&dir).ok();
    }
}
