//! # HOMO/LUMO 索引解析器
//!
//! 在本征值列表中查找第一个占据数为 0 的态，据此计算能带文件中 HOMO/LUMO 的列索引。
//!
//! ```text
//!   State    Occupation    Eigenvalue [Ha]    Eigenvalue [eV]
//!       6       2.00000          -0.213456          -5.80845
//!       7       0.00000       -0.108765          -2.95964
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/{homo_lumo,bands}.rs` 使用
//! - 使用 `models/bands.rs`

use crate::error::{BandanaError, Result};
use crate::models::BandIndices;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 定宽输出格式中零占据数字段及其两侧空白
pub const HOMO_LUMO_MARKER: &str = "      0.00000       ";

/// 解析 HOMO/LUMO 索引
pub fn parse_homo_lumo_file(path: &Path) -> Result<BandIndices> {
    let file = File::open(path).map_err(|e| BandanaError::from_read(path, e))?;
    let name = path.display().to_string();

    let reader = BufReader::new(file);
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| BandanaError::FileReadError {
            path: name.clone(),
            source: e,
        })?;

        if line.contains(HOMO_LUMO_MARKER) {
            return indices_from_marker_line(&line, &name, i + 1);
        }
    }

    Err(marker_not_found(&name))
}

/// 从字符串内容解析 HOMO/LUMO 索引
pub fn parse_homo_lumo_content(content: &str, name: &str) -> Result<BandIndices> {
    content
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains(HOMO_LUMO_MARKER))
        .map(|(i, line)| indices_from_marker_line(line, name, i + 1))
        .unwrap_or_else(|| Err(marker_not_found(name)))
}

fn indices_from_marker_line(line: &str, name: &str, line_no: usize) -> Result<BandIndices> {
    // 态编号为行内第一个整数字段（通常位于行首）
    let n: usize = line
        .split_whitespace()
        .find_map(|field| field.parse().ok())
        .ok_or_else(|| {
            BandanaError::malformed(name, line_no, format!("no state index in '{}'", line.trim()))
        })?;

    if n == 0 {
        return Err(BandanaError::malformed(
            name,
            line_no,
            "state index must be at least 1",
        ));
    }

    Ok(BandIndices::from_state(n))
}

fn marker_not_found(name: &str) -> BandanaError {
    BandanaError::MarkerNotFound {
        path: name.to_string(),
        marker: HOMO_LUMO_MARKER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_line() {
        let content = "  State    Occupation    Eigenvalue [Ha]    Eigenvalue [eV]\n\
                       \x20     6       2.00000       -0.2134       -5.8084\n\
                       \x20     7      0.00000        7\n";
        let idx = parse_homo_lumo_content(content, "out").unwrap();
        assert_eq!(idx.first_empty_state, 7);
        assert_eq!(idx.homo, 15);
        assert_eq!(idx.lumo, 17);
    }

    #[test]
    fn test_exact_marker_from_format() {
        let content = format!("7{}-0.108765   -2.95964\n", HOMO_LUMO_MARKER);
        let idx = parse_homo_lumo_content(&content, "out").unwrap();
        assert_eq!((idx.homo, idx.lumo), (15, 17));
    }

    #[test]
    fn test_first_match_only() {
        let content = format!(
            "3{m}-0.1\n9{m}-0.2\n",
            m = HOMO_LUMO_MARKER
        );
        let idx = parse_homo_lumo_content(&content, "out").unwrap();
        assert_eq!(idx.first_empty_state, 3);
    }

    #[test]
    fn test_state_index_after_occupation() {
        let content = "      0.00000        7\n";
        let idx = parse_homo_lumo_content(content, "out").unwrap();
        assert_eq!(idx.homo, 4 + 2 * 6 - 1);
        assert_eq!(idx.lumo, 4 + 2 * 7 - 1);
    }

    #[test]
    fn test_missing_marker() {
        let content = "      1       2.00000       -0.5\n";
        let err = parse_homo_lumo_content(content, "out").unwrap_err();
        assert!(matches!(err, BandanaError::MarkerNotFound { .. }));
    }

    #[test]
    fn test_non_integer_state() {
        let content = format!("x{}-0.1\n", HOMO_LUMO_MARKER);
        let err = parse_homo_lumo_content(&content, "out").unwrap_err();
        assert!(matches!(err, BandanaError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_zero_state_rejected() {
        let content = format!("0{}-0.1\n", HOMO_LUMO_MARKER);
        assert!(parse_homo_lumo_content(&content, "out").is_err());
    }
}
