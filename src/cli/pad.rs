//! # pad 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/plot.rs` 使用
//! - 参数传递给 `commands/pad.rs`

use bandana::padding::{PadMode, PadWidth, ReflectType};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 镜像模式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum PadModeArg {
    /// Mirror about the edge value (edge not repeated)
    #[default]
    Reflect,
    /// Mirror beyond the edge (edge repeated)
    Symmetric,
}

impl From<PadModeArg> for PadMode {
    fn from(arg: PadModeArg) -> Self {
        match arg {
            PadModeArg::Reflect => PadMode::Reflect,
            PadModeArg::Symmetric => PadMode::Symmetric,
        }
    }
}

/// 反射类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ReflectTypeArg {
    /// Plain mirror image
    #[default]
    Even,
    /// Mirror image negated about the edge value
    Odd,
}

impl From<ReflectTypeArg> for ReflectType {
    fn from(arg: ReflectTypeArg) -> Self {
        match arg {
            ReflectTypeArg::Even => ReflectType::Even,
            ReflectTypeArg::Odd => ReflectType::Odd,
        }
    }
}

/// pad 子命令参数
#[derive(Args, Debug)]
pub struct PadArgs {
    /// Whitespace-separated numeric table to pad
    pub input: PathBuf,

    /// Output file (CSV, or whitespace-separated for other extensions)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Rows added before the first row
    #[arg(long, default_value_t = 0)]
    pub pre_rows: usize,

    /// Rows added after the last row
    #[arg(long, default_value_t = 0)]
    pub post_rows: usize,

    /// Columns added before the first column
    #[arg(long, default_value_t = 0)]
    pub pre_cols: usize,

    /// Columns added after the last column
    #[arg(long, default_value_t = 0)]
    pub post_cols: usize,

    /// Same margin on all four sides (overrides the individual margins)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Padding mode
    #[arg(long, value_enum, default_value = "reflect")]
    pub mode: PadModeArg,

    /// Reflection type
    #[arg(long, value_enum, default_value = "even")]
    pub reflect: ReflectTypeArg,
}

impl PadArgs {
    pub fn pad_width(&self) -> PadWidth {
        match self.width {
            Some(n) => PadWidth::uniform(n),
            None => PadWidth::new(self.pre_rows, self.post_rows, self.pre_cols, self.post_cols),
        }
    }
}
