//! # geometry 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/geometry.rs`

use clap::Args;
use std::path::PathBuf;

/// geometry 子命令参数
#[derive(Args, Debug)]
pub struct GeometryArgs {
    /// Path to the geometry.in file
    pub input: PathBuf,

    /// Write the structure as a VASP POSCAR file
    #[arg(long)]
    pub poscar: Option<PathBuf>,

    /// Write the atom records as a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
