//! # bands 命令实现
//!
//! 收集能带文件，取出一列能量堆叠为矩阵 (文件 × 采样点, Hartree) 并写出。
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的参数
//! - 使用 `bandana::parsers::{bands, homo_lumo}`, `bandana::export`
//! - 使用 `utils/{files,output,progress}.rs`
//! - 被 `commands/plot.rs` 复用

use crate::cli::bands::{BandSourceArgs, BandsArgs, FrontierState};
use crate::utils::{files, output, progress};
use bandana::error::{BandanaError, Result};
use bandana::export;
use bandana::parsers::bands::load_band_energies_with_progress;
use bandana::parsers::parse_homo_lumo_file;

use ndarray::Array2;
use std::path::{Path, PathBuf};

/// 执行 bands 命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Band Energies");

    let column = match (args.column, &args.homo_lumo) {
        (Some(column), _) => column,
        (None, Some(listing)) => frontier_column(listing, args.state)?,
        (None, None) => {
            return Err(BandanaError::InvalidArgument(
                "either --column or --homo-lumo is required".to_string(),
            ))
        }
    };

    let band_files = collect(&args.source)?;
    let energies = load_column(&band_files, column, args.source.limit)?;

    let (n_files, n_points) = energies.dim();
    output::print_success(&format!(
        "Energy matrix: {} files x {} points (column {}, Hartree)",
        n_files, n_points, column
    ));

    export::write_matrix(&energies, &args.output)?;
    output::print_written("Bands", &args.output.display().to_string());

    Ok(())
}

/// 从本征值列表中取 HOMO 或 LUMO 所在列
pub fn frontier_column(listing: &Path, state: FrontierState) -> Result<usize> {
    let indices = parse_homo_lumo_file(listing)?;
    let column = match state {
        FrontierState::Homo => indices.homo,
        FrontierState::Lumo => indices.lumo,
    };
    output::print_info(&format!(
        "{} column {} (first empty state {})",
        state, column, indices.first_empty_state
    ));
    Ok(column)
}

/// 收集能带文件
pub fn collect(source: &BandSourceArgs) -> Result<Vec<PathBuf>> {
    let band_files = files::collect_band_files(&source.dir, &source.pattern, source.recursive)?;
    output::print_info(&format!(
        "Found {} band files in '{}'",
        band_files.len(),
        source.dir.display()
    ));
    Ok(band_files)
}

/// 带进度条加载一列能量
pub fn load_column(band_files: &[PathBuf], column: usize, limit: Option<usize>) -> Result<Array2<f64>> {
    let pb = progress::create_progress_bar(band_files.len() as u64, "Loading");
    let result = load_band_energies_with_progress(band_files, column, limit, |_| pb.inc(1));
    pb.finish_and_clear();
    result
}
