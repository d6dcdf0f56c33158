//! # bandana - 三维能带结构解析与绘图
//!
//! 计算材料工作流中的小型工具例程：
//! - 解析 FHI-aims geometry.in 几何结构
//! - 定位 HOMO/LUMO 所在列
//! - 加载能带能量文件为能量矩阵 (Hartree)
//! - 二维矩阵对称填充
//! - 三维能带曲面图
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── parsers/   (格式解析器)
//!   │     └── models/  (数据模型)
//!   ├── padding.rs (对称填充)
//!   ├── plot/      (三维曲面图)
//!   ├── export.rs  (数据导出)
//!   └── error.rs   (错误处理)
//! ```

pub mod error;
pub mod export;
pub mod models;
pub mod padding;
pub mod parsers;
pub mod plot;

pub use error::{BandanaError, Result};
