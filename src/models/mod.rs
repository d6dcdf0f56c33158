//! # 数据模型模块
//!
//! 定义几何结构与能带索引数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: geometry, bands

pub mod bands;
pub mod geometry;

pub use bands::BandIndices;
pub use geometry::{Atom, CoordinateSystem, Geometry};
