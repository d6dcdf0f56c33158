//! # bandana 命令行入口
//!
//! ## 子命令
//! - `geometry`  - 解析 geometry.in，导出 POSCAR / CSV
//! - `homo-lumo` - HOMO/LUMO 列索引
//! - `bands`     - 加载能带能量矩阵
//! - `pad`       - 对称填充矩阵
//! - `plot`      - 三维能带曲面图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── bandana 库 (parsers, padding, plot, export)
//!   └── utils/      (输出、进度条、文件收集)
//! ```

mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
