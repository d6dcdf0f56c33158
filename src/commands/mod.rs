//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `bandana` 库 (parsers, padding, plot, export), `utils/`
//! - 子模块: geometry, homo_lumo, bands, pad, plot

pub mod bands;
pub mod geometry;
pub mod homo_lumo;
pub mod pad;
pub mod plot;

use crate::cli::Commands;
use bandana::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Geometry(args) => geometry::execute(args),
        Commands::HomoLumo(args) => homo_lumo::execute(args),
        Commands::Bands(args) => bands::execute(args),
        Commands::Pad(args) => pad::execute(args),
        Commands::Plot(args) => plot::execute(args),
    }
}
