//! # 数据导出
//!
//! 导出能量矩阵、原子记录与文本结构文件。
//!
//! ## 支持格式
//! - 矩阵: `.csv` 逗号分隔，其他扩展名空格分隔（可被 `parsers::bands::load_table` 读回）
//! - 原子记录: CSV (species, x, y, z, system)
//!
//! ## 依赖关系
//! - 被 `commands/{geometry,bands,pad}.rs` 调用
//! - 使用 `csv` 库写入

use crate::error::{BandanaError, Result};
use crate::models::{CoordinateSystem, Geometry};

use ndarray::Array2;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// 按扩展名选择分隔符
fn delimiter_for(path: &Path) -> u8 {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("csv") => b',',
        _ => b' ',
    }
}

/// 写出二维矩阵，每行一条记录
pub fn write_matrix(matrix: &Array2<f64>, output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter_for(output_path))
        .has_headers(false)
        .from_path(output_path)?;

    for row in matrix.rows() {
        wtr.write_record(row.iter().map(|v| format!("{:.10e}", v)))?;
    }

    wtr.flush().map_err(|e| BandanaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[derive(Serialize)]
struct AtomRow<'a> {
    species: &'a str,
    x: f64,
    y: f64,
    z: f64,
    system: CoordinateSystem,
}

/// 导出原子记录为 CSV
pub fn write_atoms_csv(geometry: &Geometry, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for atom in &geometry.atoms {
        wtr.serialize(AtomRow {
            species: &atom.species,
            x: atom.position[0],
            y: atom.position[1],
            z: atom.position[2],
            system: atom.system,
        })?;
    }

    wtr.flush().map_err(|e| BandanaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 写出文本文件
pub fn write_text(content: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, content).map_err(|e| BandanaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
