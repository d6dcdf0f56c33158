//! # plot 命令实现
//!
//! 对每个选定的能量列加载一张 (k 线 × 采样点) 曲面，可选镜像填充，
//! 堆叠为 (能带, kx, ky) 后绘制三维曲面图。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 复用 `commands/bands.rs` 的文件收集与加载
//! - 使用 `bandana::padding`, `bandana::plot`

use crate::cli::bands::FrontierState;
use crate::cli::plot::PlotArgs;
use crate::commands::bands;
use crate::utils::output;
use bandana::error::{BandanaError, Result};
use bandana::padding::{sympad, PadMode, PadWidth, ReflectType};
use bandana::plot::{bandplot3d, BandPlotConfig, PlotFormat};

use ndarray::{stack, Array2, ArrayView2, Axis};

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("3D Band Structure");

    let columns = match &args.homo_lumo {
        Some(listing) => vec![
            bands::frontier_column(listing, FrontierState::Homo)?,
            bands::frontier_column(listing, FrontierState::Lumo)?,
        ],
        None => args.columns.clone(),
    };

    let config = plot_config(&args)?;
    let band_files = bands::collect(&args.source)?;

    let mut surfaces: Vec<Array2<f64>> = Vec::with_capacity(columns.len());
    for &column in &columns {
        let surface = bands::load_column(&band_files, column, args.source.limit)?;
        let surface = if args.pad > 0 {
            sympad(
                surface.view(),
                PadWidth::uniform(args.pad),
                PadMode::Reflect,
                ReflectType::Even,
            )?
        } else {
            surface
        };
        surfaces.push(surface);
    }

    let views: Vec<ArrayView2<f64>> = surfaces.iter().map(|s| s.view()).collect();
    let stacked = stack(Axis(0), &views).map_err(|e| BandanaError::ShapeMismatch(e.to_string()))?;
    let (n_bands, nx, ny) = stacked.dim();
    output::print_info(&format!(
        "Plotting {} surfaces on a {} x {} grid",
        n_bands, nx, ny
    ));

    let selector: Vec<usize> = (0..n_bands).collect();
    bandplot3d(stacked.view().into_dyn(), &selector, &config, &args.output)?;

    output::print_written("Plot", &args.output.display().to_string());
    Ok(())
}

/// 由命令行参数构造图表配置
fn plot_config(args: &PlotArgs) -> Result<BandPlotConfig> {
    let aspect: [f64; 3] = args.aspect.as_slice().try_into().map_err(|_| {
        BandanaError::InvalidArgument(format!(
            "--aspect needs 3 values, got {}",
            args.aspect.len()
        ))
    })?;

    Ok(BandPlotConfig {
        title: args.title.clone(),
        width: args.width,
        height: args.height,
        label_size: args.label_size,
        aspect,
        format: PlotFormat::from_path(&args.output),
        ..BandPlotConfig::default()
    })
}
