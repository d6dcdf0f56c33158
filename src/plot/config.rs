//! # 三维能带图配置
//!
//! 显式列出可识别的图表选项及默认值。
//!
//! ## 依赖关系
//! - 被 `plot/surface.rs` 和 `commands/plot.rs` 使用

use serde::{Deserialize, Serialize};

/// 图表输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlotFormat {
    #[default]
    Png,
    Svg,
}

impl PlotFormat {
    /// 由文件扩展名推断，未知扩展名按 PNG 处理
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => PlotFormat::Svg,
            _ => PlotFormat::Png,
        }
    }
}

/// 图表四周留白（像素）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotMargin {
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
    pub top: u32,
}

impl Default for PlotMargin {
    fn default() -> Self {
        PlotMargin {
            left: 65,
            right: 50,
            bottom: 65,
            top: 90,
        }
    }
}

/// 三维能带曲面图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPlotConfig {
    /// 图标题
    pub title: String,

    /// 图宽（像素）
    pub width: u32,

    /// 图高（像素）
    pub height: u32,

    /// 留白
    pub margin: PlotMargin,

    /// 坐标轴标题字号
    pub label_size: u32,

    /// x, y, z (kx, ky, Energy) 方向的长宽比
    pub aspect: [f64; 3],

    /// 三维输入中能带索引所在的轴
    pub band_axis: usize,

    /// 输出格式
    pub format: PlotFormat,
}

impl Default for BandPlotConfig {
    fn default() -> Self {
        BandPlotConfig {
            title: String::new(),
            width: 600,
            height: 600,
            margin: PlotMargin::default(),
            label_size: 30,
            aspect: [1.0, 1.0, 1.0],
            band_axis: 0,
            format: PlotFormat::Png,
        }
    }
}
