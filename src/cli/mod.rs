//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `geometry`: 解析 geometry.in，可导出 POSCAR / CSV
//! - `homo-lumo`: 计算 HOMO/LUMO 列索引
//! - `bands`: 加载能带文件为能量矩阵
//! - `pad`: 对称填充矩阵
//! - `plot`: 三维能带曲面图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: geometry, bands, pad, plot

pub mod bands;
pub mod geometry;
pub mod pad;
pub mod plot;

use clap::{Parser, Subcommand};

/// bandana - 三维能带结构解析与绘图工具
#[derive(Parser)]
#[command(name = "bandana")]
#[command(author = "R. Patrick Xian, Christopher Sutton")]
#[command(version)]
#[command(about = "Parsing and plotting routines for 3D band structures of materials", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Parse an FHI-aims geometry.in file
    Geometry(geometry::GeometryArgs),

    /// Locate the HOMO/LUMO columns from an eigenvalue listing
    HomoLumo(bands::HomoLumoArgs),

    /// Load band energy files into an energy matrix (Hartree)
    Bands(bands::BandsArgs),

    /// Pad a numeric matrix by mirror reflection
    Pad(pad::PadArgs),

    /// Render a 3D band-structure surface plot
    Plot(plot::PlotArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bands_with_column() {
        let cli = Cli::try_parse_from([
            "bandana", "bands", "--dir", "out", "--column", "15", "--limit", "40",
        ])
        .unwrap();
        match cli.command {
            Commands::Bands(args) => {
                assert_eq!(args.column, Some(15));
                assert_eq!(args.source.limit, Some(40));
                assert_eq!(args.source.pattern, "band*.out");
            }
            _ => panic!("expected bands subcommand"),
        }
    }

    #[test]
    fn test_bands_requires_column_source() {
        assert!(Cli::try_parse_from(["bandana", "bands", "--dir", "out"]).is_err());
        assert!(Cli::try_parse_from([
            "bandana", "bands", "--dir", "out", "--column", "3", "--homo-lumo", "aims.out",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_plot_lists() {
        let cli = Cli::try_parse_from([
            "bandana", "plot", "--dir", "out", "--columns", "15,17", "--aspect", "1,1,0.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Plot(args) => {
                assert_eq!(args.columns, vec![15, 17]);
                assert_eq!(args.aspect, vec![1.0, 1.0, 0.5]);
                assert_eq!(args.width, 600);
            }
            _ => panic!("expected plot subcommand"),
        }
    }

    #[test]
    fn test_parse_pad_defaults() {
        let cli = Cli::try_parse_from(["bandana", "pad", "m.dat", "--output", "p.dat"]).unwrap();
        match cli.command {
            Commands::Pad(args) => {
                assert_eq!(args.mode, pad::PadModeArg::Reflect);
                assert_eq!(args.reflect, pad::ReflectTypeArg::Even);
                assert_eq!(args.pad_width().pre_rows, 0);
            }
            _ => panic!("expected pad subcommand"),
        }
    }
}
