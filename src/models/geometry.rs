//! # 几何结构数据模型
//!
//! 表示 FHI-aims `geometry.in` 风格的结构：晶格向量 + 原子记录。
//! 每条原子记录保留其坐标约定（分数 / 笛卡尔），文件中两种记录可以混用。
//!
//! ## 依赖关系
//! - 被 `parsers/geometry.rs`, `parsers/poscar.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 坐标约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSystem {
    /// 相对晶格向量的分数坐标 (`atom_frac`)
    Fractional,
    /// 绝对坐标 (`atom`)
    Cartesian,
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateSystem::Fractional => write!(f, "fractional"),
            CoordinateSystem::Cartesian => write!(f, "cartesian"),
        }
    }
}

/// 原子记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号 / 类型标签
    pub species: String,

    /// 坐标 [x, y, z]，约定见 `system`
    pub position: [f64; 3],

    /// 该记录使用的坐标约定
    pub system: CoordinateSystem,
}

impl Atom {
    pub fn fractional(species: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            species: species.into(),
            position,
            system: CoordinateSystem::Fractional,
        }
    }

    pub fn cartesian(species: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            species: species.into(),
            position,
            system: CoordinateSystem::Cartesian,
        }
    }
}

/// 几何结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// 结构名称（通常取自文件名）
    pub name: String,

    /// 晶格向量，按文件顺序
    pub lattice_vectors: Vec<[f64; 3]>,

    /// 原子记录，按文件顺序
    pub atoms: Vec<Atom>,
}

impl Geometry {
    pub fn new(name: impl Into<String>, lattice_vectors: Vec<[f64; 3]>, atoms: Vec<Atom>) -> Self {
        Geometry {
            name: name.into(),
            lattice_vectors,
            atoms,
        }
    }

    /// 文件采用的坐标约定：取最后一条原子记录的约定。
    ///
    /// 混合文件中这只反映最后一行，调用方可用 [`Geometry::is_mixed`] 检查。
    pub fn convention(&self) -> Option<CoordinateSystem> {
        self.atoms.last().map(|a| a.system)
    }

    /// 约定是否为笛卡尔坐标
    pub fn is_cartesian(&self) -> bool {
        self.convention() == Some(CoordinateSystem::Cartesian)
    }

    /// 是否同时包含分数和笛卡尔记录
    pub fn is_mixed(&self) -> bool {
        let has_frac = self
            .atoms
            .iter()
            .any(|a| a.system == CoordinateSystem::Fractional);
        let has_cart = self
            .atoms
            .iter()
            .any(|a| a.system == CoordinateSystem::Cartesian);
        has_frac && has_cart
    }

    fn atoms_in(&self, system: CoordinateSystem) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(move |a| a.system == system)
    }

    /// 所有分数坐标记录
    pub fn fractional_atoms(&self) -> Vec<&Atom> {
        self.atoms_in(CoordinateSystem::Fractional).collect()
    }

    /// 所有笛卡尔坐标记录
    pub fn cartesian_atoms(&self) -> Vec<&Atom> {
        self.atoms_in(CoordinateSystem::Cartesian).collect()
    }

    /// 约定下的坐标列表，与 [`Geometry::species`] 一一对应
    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        match self.convention() {
            Some(system) => self.atoms_in(system).map(|a| a.position).collect(),
            None => Vec::new(),
        }
    }

    /// 约定下的类型标签列表
    pub fn species(&self) -> Vec<String> {
        match self.convention() {
            Some(system) => self.atoms_in(system).map(|a| a.species.clone()).collect(),
            None => Vec::new(),
        }
    }

    /// 3x3 晶格矩阵（行向量 a, b, c）；晶格向量数不为 3 时返回 None
    pub fn lattice_matrix(&self) -> Option<[[f64; 3]; 3]> {
        match self.lattice_vectors.as_slice() {
            [a, b, c] => Some([*a, *b, *c]),
            _ => None,
        }
    }

    /// 晶胞体积
    pub fn volume(&self) -> Option<f64> {
        self.lattice_matrix().map(|m| determinant(&m).abs())
    }

    /// 分数坐标转笛卡尔坐标
    pub fn to_cartesian(&self, frac: [f64; 3]) -> Option<[f64; 3]> {
        let m = self.lattice_matrix()?;
        Some([
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ])
    }

    /// 笛卡尔坐标转分数坐标；晶格奇异时返回 None
    pub fn to_fractional(&self, cart: [f64; 3]) -> Option<[f64; 3]> {
        let m = self.lattice_matrix()?;
        let det = determinant(&m);
        if det.abs() < 1e-10 {
            return None;
        }

        // x_cart = M^T x_frac  =>  x_frac = (M^T)^-1 x_cart
        let inv = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ];

        Some([
            cart[0] * inv[0][0] + cart[1] * inv[1][0] + cart[2] * inv[2][0],
            cart[0] * inv[0][1] + cart[1] * inv[1][1] + cart[2] * inv[2][1],
            cart[0] * inv[0][2] + cart[1] * inv[1][2] + cart[2] * inv[2][2],
        ])
    }

    /// 所有原子的分数坐标（笛卡尔记录经晶格换算）
    pub fn all_fractional(&self) -> Option<Vec<[f64; 3]>> {
        self.atoms
            .iter()
            .map(|a| match a.system {
                CoordinateSystem::Fractional => Some(a.position),
                CoordinateSystem::Cartesian => self.to_fractional(a.position),
            })
            .collect()
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for atom in &self.atoms {
            *counts.entry(atom.species.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexagonal() -> Vec<[f64; 3]> {
        vec![
            [3.0, 0.0, 0.0],
            [-1.5, 3.0_f64.sqrt() * 1.5, 0.0],
            [0.0, 0.0, 5.0],
        ]
    }

    #[test]
    fn test_convention_last_wins() {
        let geo = Geometry::new(
            "mixed",
            hexagonal(),
            vec![
                Atom::fractional("Mo", [0.0, 0.0, 0.5]),
                Atom::cartesian("S", [0.0, 1.7, 1.0]),
            ],
        );
        assert_eq!(geo.convention(), Some(CoordinateSystem::Cartesian));
        assert!(geo.is_cartesian());
        assert!(geo.is_mixed());
        assert_eq!(geo.coordinates().len(), geo.species().len());
        assert_eq!(geo.species(), vec!["S".to_string()]);
    }

    #[test]
    fn test_empty_geometry_has_no_convention() {
        let geo = Geometry::new("empty", hexagonal(), vec![]);
        assert_eq!(geo.convention(), None);
        assert!(geo.coordinates().is_empty());
        assert!(!geo.is_mixed());
    }

    #[test]
    fn test_fractional_cartesian_round_trip() {
        let geo = Geometry::new("hex", hexagonal(), vec![]);
        let frac = [1.0 / 3.0, 2.0 / 3.0, 0.25];
        let cart = geo.to_cartesian(frac).unwrap();
        let back = geo.to_fractional(cart).unwrap();
        for i in 0..3 {
            assert!((back[i] - frac[i]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_volume_cubic() {
        let geo = Geometry::new(
            "cubic",
            vec![[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]],
            vec![],
        );
        assert!((geo.volume().unwrap() - 64.0).abs() < 1e-10);
    }

    #[test]
    fn test_lattice_matrix_requires_three_vectors() {
        let geo = Geometry::new("slab", vec![[4.0, 0.0, 0.0], [0.0, 4.0, 0.0]], vec![]);
        assert!(geo.lattice_matrix().is_none());
        assert!(geo.to_fractional([1.0, 1.0, 1.0]).is_none());
    }

    #[test]
    fn test_formula() {
        let geo = Geometry::new(
            "MoS2",
            hexagonal(),
            vec![
                Atom::fractional("Mo", [0.0, 0.0, 0.5]),
                Atom::fractional("S", [1.0 / 3.0, 2.0 / 3.0, 0.4]),
                Atom::fractional("S", [1.0 / 3.0, 2.0 / 3.0, 0.6]),
            ],
        );
        assert_eq!(geo.formula(), "MoS2");
    }

    #[test]
    fn test_all_fractional_converts_cartesian() {
        let geo = Geometry::new(
            "cubic",
            vec![[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
            vec![
                Atom::fractional("Na", [0.0, 0.0, 0.0]),
                Atom::cartesian("Cl", [1.0, 1.0, 1.0]),
            ],
        );
        let frac = geo.all_fractional().unwrap();
        assert!((frac[1][0] - 0.5).abs() < 1e-12);
        assert!((frac[1][2] - 0.5).abs() < 1e-12);
    }
}
