//! # bands / homo-lumo 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/plot.rs` 使用
//! - 参数传递给 `commands/{bands,homo_lumo}.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 能带文件来源（bands 与 plot 共用）
#[derive(Args, Debug)]
pub struct BandSourceArgs {
    /// Directory containing the band energy files
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Glob pattern for band energy files
    #[arg(short, long, default_value = "band*.out")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Keep only the first N rows of every file
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// 前线轨道选择
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FrontierState {
    /// Highest occupied state
    Homo,
    /// Lowest unoccupied state
    Lumo,
}

impl std::fmt::Display for FrontierState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontierState::Homo => write!(f, "HOMO"),
            FrontierState::Lumo => write!(f, "LUMO"),
        }
    }
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    #[command(flatten)]
    pub source: BandSourceArgs,

    /// Column index (0-based) holding the band energies
    #[arg(short, long, required_unless_present = "homo_lumo", conflicts_with = "homo_lumo")]
    pub column: Option<usize>,

    /// Take the column from the HOMO/LUMO marker in this eigenvalue listing
    #[arg(long)]
    pub homo_lumo: Option<PathBuf>,

    /// Which frontier state to load with --homo-lumo
    #[arg(long, value_enum, default_value = "homo")]
    pub state: FrontierState,

    /// Output file (CSV, or whitespace-separated for other extensions)
    #[arg(short, long, default_value = "bands.csv")]
    pub output: PathBuf,
}

/// homo-lumo 子命令参数
#[derive(Args, Debug)]
pub struct HomoLumoArgs {
    /// Path to the eigenvalue listing
    pub input: PathBuf,
}
