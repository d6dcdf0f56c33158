//! # 解析器模块
//!
//! 提供几何结构、HOMO/LUMO 索引与能带能量文件的解析器，以及 POSCAR 导出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: geometry, homo_lumo, bands, poscar

pub mod bands;
pub mod geometry;
pub mod homo_lumo;
pub mod poscar;

pub use bands::{load_band_energies, HARTREE_TO_EV};
pub use geometry::parse_geometry_file;
pub use homo_lumo::{parse_homo_lumo_file, HOMO_LUMO_MARKER};
