//! # 三维能带曲面图
//!
//! 使用 `plotters` 将选定能带绘制为同一三维场景中的曲面。
//!
//! ## 功能
//! - 二维输入视为单条能带，三维输入按 `band_axis` 取能带
//! - 每条选定能带一个曲面，配色取自 Palette99
//! - 坐标轴标题 kx / ky / Energy，隐藏刻度标签
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `plot/config.rs` 的 BandPlotConfig
//! - 使用 `plotters` 渲染图表

use crate::error::{BandanaError, Result};
use crate::plot::config::{BandPlotConfig, PlotFormat};

use ndarray::{ArrayView3, ArrayViewD, Axis, Ix2, Ix3};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// 将输入整理为 (能带, kx, ky) 视图
pub fn band_stack(bands: ArrayViewD<'_, f64>, band_axis: usize) -> Result<ArrayView3<'_, f64>> {
    match bands.ndim() {
        2 => {
            let single = bands
                .into_dimensionality::<Ix2>()
                .map_err(|e| BandanaError::ShapeMismatch(e.to_string()))?;
            Ok(single.insert_axis(Axis(0)))
        }
        3 => {
            let stack = bands
                .into_dimensionality::<Ix3>()
                .map_err(|e| BandanaError::ShapeMismatch(e.to_string()))?;
            // 其余两轴保持原有顺序
            match band_axis {
                0 => Ok(stack),
                1 => Ok(stack.permuted_axes([1, 0, 2])),
                2 => Ok(stack.permuted_axes([2, 0, 1])),
                _ => Err(BandanaError::InvalidArgument(format!(
                    "band axis {} out of range for a 3D array",
                    band_axis
                ))),
            }
        }
        n => Err(BandanaError::InvalidArgument(format!(
            "band data must be 2D or 3D, got {}D",
            n
        ))),
    }
}

/// 检查能带选择器
pub fn validate_selector(n_bands: usize, selector: &[usize]) -> Result<()> {
    if selector.is_empty() {
        return Err(BandanaError::InvalidArgument(
            "no bands selected for plotting".to_string(),
        ));
    }
    if let Some(&bad) = selector.iter().find(|&&b| b >= n_bands) {
        return Err(BandanaError::InvalidArgument(format!(
            "band {} selected but only {} available",
            bad, n_bands
        )));
    }
    Ok(())
}

/// 计算三个坐标轴的范围 (x = kx, y = Energy, z = ky)。
///
/// 通过延长坐标范围使数据在场景中按 `aspect` 的比例占据空间。
pub fn axis_ranges(
    nx: usize,
    ny: usize,
    energy: (f64, f64),
    aspect: [f64; 3],
) -> Result<(Range<f64>, Range<f64>, Range<f64>)> {
    if nx < 2 || ny < 2 {
        return Err(BandanaError::InvalidArgument(format!(
            "a band surface needs at least 2x2 k-points, got {}x{}",
            nx, ny
        )));
    }
    if aspect.iter().any(|a| !a.is_finite() || *a <= 0.0) {
        return Err(BandanaError::InvalidArgument(format!(
            "aspect ratios must be positive, got {:?}",
            aspect
        )));
    }

    let (mut e_lo, mut e_hi) = energy;
    if !(e_hi - e_lo).is_finite() {
        return Err(BandanaError::InvalidArgument(
            "band energies are not finite".to_string(),
        ));
    }
    if e_hi - e_lo < 1e-12 {
        e_lo -= 0.5;
        e_hi += 0.5;
    }

    let max_aspect = aspect.iter().cloned().fold(f64::MIN, f64::max);
    let extend = |lo: f64, span: f64, a: f64| lo..lo + span * max_aspect / a;

    Ok((
        extend(0.0, (nx - 1) as f64, aspect[0]),
        extend(e_lo, e_hi - e_lo, aspect[2]),
        extend(0.0, (ny - 1) as f64, aspect[1]),
    ))
}

/// 生成三维能带曲面图
pub fn bandplot3d(
    bands: ArrayViewD<'_, f64>,
    selector: &[usize],
    config: &BandPlotConfig,
    output_path: &Path,
) -> Result<()> {
    let stack = band_stack(bands, config.band_axis)?;
    let (n_bands, nx, ny) = stack.dim();
    validate_selector(n_bands, selector)?;

    if nx < 2 || ny < 2 {
        return Err(BandanaError::InvalidArgument(format!(
            "a surface needs at least 2x2 points, got {}x{}",
            nx, ny
        )));
    }

    match config.format {
        PlotFormat::Svg => {
            let root =
                SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_band_surfaces(&root, stack, selector, config)?;
            root.present()
                .map_err(|e| BandanaError::PlotError(e.to_string()))?;
        }
        PlotFormat::Png => {
            let root =
                BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
            draw_band_surfaces(&root, stack, selector, config)?;
            root.present()
                .map_err(|e| BandanaError::PlotError(e.to_string()))?;
        }
    }

    Ok(())
}

/// 选定能带的能量范围
fn energy_range(stack: &ArrayView3<'_, f64>, selector: &[usize]) -> (f64, f64) {
    selector
        .iter()
        .flat_map(|&b| stack.index_axis(Axis(0), b))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &e| {
            (lo.min(e), hi.max(e))
        })
}

/// 绘制曲面的核心逻辑
fn draw_band_surfaces<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    stack: ArrayView3<'_, f64>,
    selector: &[usize],
    config: &BandPlotConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?;

    let (_, nx, ny) = stack.dim();
    let (x_range, y_range, z_range) =
        axis_ranges(nx, ny, energy_range(&stack, selector), config.aspect)?;
    let (x_lo, y_lo, z_lo) = (x_range.start, y_range.start, z_range.start);
    let (x_hi, y_hi, z_hi) = (x_range.end, y_range.end, z_range.end);

    let mut builder = ChartBuilder::on(root);
    builder
        .margin_left(config.margin.left as i32)
        .margin_right(config.margin.right as i32)
        .margin_top(config.margin.top as i32)
        .margin_bottom(config.margin.bottom as i32);
    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", 24).into_font());
    }

    let mut chart = builder
        .build_cartesian_3d(x_range, y_range, z_range)
        .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.45;
        pb.yaw = 0.6;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.1))
        .max_light_lines(3)
        .x_formatter(&|_: &f64| String::new())
        .y_formatter(&|_: &f64| String::new())
        .z_formatter(&|_: &f64| String::new())
        .draw()
        .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?;

    for (k, &band) in selector.iter().enumerate() {
        let surface = stack.index_axis(Axis(0), band).to_owned();
        let color = Palette99::pick(k).mix(0.75);

        chart
            .draw_series(
                SurfaceSeries::xoz(
                    (0..nx).map(|i| i as f64),
                    (0..ny).map(|j| j as f64),
                    move |x: f64, z: f64| surface[[x as usize, z as usize]],
                )
                .style(color.filled()),
            )
            .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?
            .label(format!("band {}", band))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    // 坐标轴标题
    let title_style = ("sans-serif", config.label_size).into_font().color(&BLACK);
    let axis_titles = [
        ("kx", ((x_lo + x_hi) / 2.0, y_lo, z_hi)),
        ("ky", (x_hi, y_lo, (z_lo + z_hi) / 2.0)),
        ("Energy", (x_lo, y_hi, z_hi)),
    ];
    for (text, pos) in axis_titles {
        chart
            .draw_series(std::iter::once(Text::new(text, pos, title_style.clone())))
            .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| BandanaError::PlotError(format!("{:?}", e)))?;

    Ok(())
}
