//! # 绘图模块
//!
//! 三维能带结构曲面图。
//!
//! ## 子模块
//! - `config`: 图表配置与默认值
//! - `surface`: 曲面渲染
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用

pub mod config;
pub mod surface;

pub use config::{BandPlotConfig, PlotFormat, PlotMargin};
pub use surface::bandplot3d;
