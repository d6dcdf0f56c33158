//! # plot 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use super::bands::BandSourceArgs;
use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub source: BandSourceArgs,

    /// Energy columns to plot, one surface each (e.g. "15,17")
    #[arg(short, long, value_delimiter = ',', required_unless_present = "homo_lumo")]
    pub columns: Vec<usize>,

    /// Plot the HOMO and LUMO surfaces located in this eigenvalue listing
    #[arg(long, conflicts_with = "columns")]
    pub homo_lumo: Option<PathBuf>,

    /// Mirror-pad every surface by this many points on each side
    #[arg(long, default_value_t = 0)]
    pub pad: usize,

    /// Output image (PNG or SVG, by extension)
    #[arg(short, long, default_value = "bands3d.png")]
    pub output: PathBuf,

    /// Title for the plot
    #[arg(long, default_value = "")]
    pub title: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Font size of the axis titles
    #[arg(long, default_value_t = 30)]
    pub label_size: u32,

    /// Aspect ratio of the kx, ky and energy directions
    #[arg(long, value_delimiter = ',', default_value = "1,1,1")]
    pub aspect: Vec<f64>,
}
