//! # VASP POSCAR 写出
//!
//! 将 geometry.in 结构导出为 POSCAR (VASP 5+) 格式，坐标统一为 Direct。
//!
//! ## 依赖关系
//! - 被 `commands/geometry.rs` 使用
//! - 使用 `models/geometry.rs`

use crate::error::{BandanaError, Result};
use crate::models::Geometry;
use std::collections::BTreeMap;

/// 将 Geometry 转换为 POSCAR 格式字符串
pub fn to_poscar_string(geometry: &Geometry) -> Result<String> {
    let matrix = geometry.lattice_matrix().ok_or_else(|| {
        BandanaError::InvalidArgument(format!(
            "POSCAR needs 3 lattice vectors, '{}' has {}",
            geometry.name,
            geometry.lattice_vectors.len()
        ))
    })?;
    let fractional = geometry.all_fractional().ok_or_else(|| {
        BandanaError::InvalidArgument(format!("singular lattice in '{}'", geometry.name))
    })?;

    // 按元素分组，保持首次出现的顺序
    let mut elem_order: Vec<&str> = Vec::new();
    let mut elem_atoms: BTreeMap<&str, Vec<[f64; 3]>> = BTreeMap::new();

    for (atom, pos) in geometry.atoms.iter().zip(fractional) {
        if !elem_order.contains(&atom.species.as_str()) {
            elem_order.push(&atom.species);
        }
        elem_atoms.entry(&atom.species).or_default().push(pos);
    }

    let mut result = String::new();

    result.push_str(&format!("{}\n", geometry.name));
    result.push_str("1.0\n");

    for row in &matrix {
        result.push_str(&format!(
            "  {:16.10}  {:16.10}  {:16.10}\n",
            row[0], row[1], row[2]
        ));
    }

    result.push_str(&format!("   {}\n", elem_order.join("   ")));

    let counts: Vec<String> = elem_order
        .iter()
        .map(|e| elem_atoms.get(e).map(|v| v.len()).unwrap_or(0).to_string())
        .collect();
    result.push_str(&format!("   {}\n", counts.join("   ")));

    result.push_str("Direct\n");

    for elem in &elem_order {
        if let Some(positions) = elem_atoms.get(elem) {
            for pos in positions {
                result.push_str(&format!(
                    "  {:16.10}  {:16.10}  {:16.10}\n",
                    pos[0], pos[1], pos[2]
                ));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Atom;

    #[test]
    fn test_poscar_groups_species() {
        let geo = Geometry::new(
            "TiO2",
            vec![[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            vec![
                Atom::fractional("O", [0.5, 0.5, 0.0]),
                Atom::cartesian("Ti", [0.0, 0.0, 0.0]),
                Atom::fractional("O", [0.5, 0.0, 0.5]),
            ],
        );
        let poscar = to_poscar_string(&geo).unwrap();
        let lines: Vec<&str> = poscar.lines().collect();

        assert_eq!(lines[0], "TiO2");
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), vec!["O", "Ti"]);
        assert_eq!(lines[6].split_whitespace().collect::<Vec<_>>(), vec!["2", "1"]);
        assert_eq!(lines[7], "Direct");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_poscar_converts_cartesian() {
        let geo = Geometry::new(
            "Cl",
            vec![[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
            vec![Atom::cartesian("Cl", [1.0, 1.0, 1.0])],
        );
        let poscar = to_poscar_string(&geo).unwrap();
        let last: Vec<f64> = poscar
            .lines()
            .last()
            .unwrap()
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(last.len(), 3);
        assert!(last.iter().all(|v| (v - 0.5).abs() < 1e-9));
    }

    #[test]
    fn test_poscar_requires_lattice() {
        let geo = Geometry::new("molecule", vec![], vec![Atom::cartesian("H", [0.0; 3])]);
        assert!(matches!(
            to_poscar_string(&geo),
            Err(BandanaError::InvalidArgument(_))
        ));
    }
}
