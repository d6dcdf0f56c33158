//! # FHI-aims geometry.in 解析器
//!
//! ## 格式说明
//! ```text
//! lattice_vector   3.16   0.00   0.00
//! lattice_vector  -1.58   2.74   0.00
//! lattice_vector   0.00   0.00  20.00
//! atom_frac        0.00   0.00   0.50   Mo
//! atom             1.58   0.91  11.56   S
//! ```
//! - `lattice_vector x y z`: 晶格向量
//! - `atom_frac x y z El`: 分数坐标原子
//! - `atom x y z El`: 笛卡尔坐标原子
//!
//! 以 `#` 开头的行为注释。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/geometry.rs` 使用
//! - 使用 `models/geometry.rs`

use crate::error::{BandanaError, Result};
use crate::models::{Atom, Geometry};
use std::fs;
use std::path::Path;

const LATTICE_TAG: &str = "lattice_vector";
const FRACTIONAL_TAG: &str = "atom_frac";
// 尾部空格用于区分 `atom_frac`
const CARTESIAN_TAG: &str = "atom ";

/// 解析 geometry.in 文件
pub fn parse_geometry_file(path: &Path) -> Result<Geometry> {
    let content = fs::read_to_string(path).map_err(|e| BandanaError::from_read(path, e))?;

    parse_geometry_content(&content, &path.display().to_string())
}

/// 从字符串内容解析 geometry.in 格式
pub fn parse_geometry_content(content: &str, name: &str) -> Result<Geometry> {
    let mut lattice_vectors: Vec<[f64; 3]> = Vec::new();
    let mut atoms: Vec<Atom> = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;

        if line.trim_start().starts_with('#') {
            continue;
        }

        if line.contains(LATTICE_TAG) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            lattice_vectors.push(parse_vector(&fields, name, line_no)?);
        }

        if line.contains(FRACTIONAL_TAG) {
            let (position, species) = parse_atom(line, name, line_no)?;
            atoms.push(Atom::fractional(species, position));
        } else if line.contains(CARTESIAN_TAG) {
            let (position, species) = parse_atom(line, name, line_no)?;
            atoms.push(Atom::cartesian(species, position));
        }
    }

    if atoms.is_empty() {
        return Err(BandanaError::NoAtomRecords {
            path: name.to_string(),
        });
    }

    Ok(Geometry::new(name, lattice_vectors, atoms))
}

/// 解析原子行: `tag x y z species`
fn parse_atom(line: &str, name: &str, line_no: usize) -> Result<([f64; 3], String)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(BandanaError::malformed(
            name,
            line_no,
            format!("atom record needs 5 fields, found {}", fields.len()),
        ));
    }

    let position = parse_vector(&fields, name, line_no)?;
    Ok((position, fields[4].to_string()))
}

/// 解析第 2-4 个字段为三维向量
fn parse_vector(fields: &[&str], name: &str, line_no: usize) -> Result<[f64; 3]> {
    if fields.len() < 4 {
        return Err(BandanaError::malformed(
            name,
            line_no,
            format!("expected 3 components after the tag, found {}", fields.len().saturating_sub(1)),
        ));
    }

    let mut v = [0.0; 3];
    for (k, field) in fields[1..4].iter().enumerate() {
        v[k] = field.parse().map_err(|_| {
            BandanaError::malformed(name, line_no, format!("invalid number '{}'", field))
        })?;
    }
    Ok(v)
}
