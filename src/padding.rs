//! # 对称填充
//!
//! 沿两个轴以镜像方式扩展二维矩阵的边缘，语义与 numpy `pad(mode="reflect" | "symmetric")` 一致。
//!
//! ## 模式
//! - `Reflect`: 以边缘元素为镜面，边缘值不重复 `[1 2 3] -> 3 2 [1 2 3] 2 1`
//! - `Symmetric`: 镜面位于边缘之外，边缘值重复 `[1 2 3] -> 2 1 [1 2 3] 3 2`
//!
//! ## 反射类型
//! - `Even`: 直接镜像
//! - `Odd`: 关于边缘值取反，`2 * edge - mirrored`
//!
//! 填充宽度大于轴长时反复镜像。先填充行方向，再对包括新增行在内的所有行填充列方向。
//!
//! ## 依赖关系
//! - 被 `commands/{pad,plot}.rs` 使用
//! - 使用 `ndarray`

use crate::error::{BandanaError, Result};
use ndarray::{aview1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// 镜像模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadMode {
    /// 边缘值不重复
    #[default]
    Reflect,
    /// 边缘值重复
    Symmetric,
}

/// 反射类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReflectType {
    #[default]
    Even,
    Odd,
}

/// 四个方向的填充宽度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PadWidth {
    pub pre_rows: usize,
    pub post_rows: usize,
    pub pre_cols: usize,
    pub post_cols: usize,
}

impl PadWidth {
    pub fn new(pre_rows: usize, post_rows: usize, pre_cols: usize, post_cols: usize) -> Self {
        PadWidth {
            pre_rows,
            post_rows,
            pre_cols,
            post_cols,
        }
    }

    /// 四边相同宽度
    pub fn uniform(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// 仅行方向
    pub fn rows(pre: usize, post: usize) -> Self {
        Self::new(pre, post, 0, 0)
    }

    /// 仅列方向
    pub fn cols(pre: usize, post: usize) -> Self {
        Self::new(0, 0, pre, post)
    }

    /// 填充后的形状
    pub fn padded_shape(&self, (rows, cols): (usize, usize)) -> (usize, usize) {
        (
            rows + self.pre_rows + self.post_rows,
            cols + self.pre_cols + self.post_cols,
        )
    }
}

/// `((pre_rows, post_rows), (pre_cols, post_cols))`
impl From<((usize, usize), (usize, usize))> for PadWidth {
    fn from(((pre_rows, post_rows), (pre_cols, post_cols)): ((usize, usize), (usize, usize))) -> Self {
        Self::new(pre_rows, post_rows, pre_cols, post_cols)
    }
}

/// 对称填充二维矩阵
pub fn sympad(
    matrix: ArrayView2<f64>,
    pads: impl Into<PadWidth>,
    mode: PadMode,
    reflect: ReflectType,
) -> Result<Array2<f64>> {
    let pads = pads.into();
    let rows_padded = pad_axis(matrix, Axis(0), pads.pre_rows, pads.post_rows, mode, reflect)?;
    pad_axis(
        rows_padded.view(),
        Axis(1),
        pads.pre_cols,
        pads.post_cols,
        mode,
        reflect,
    )
}

/// 以四个边距填充，使用默认的 `Reflect` + `Even`
pub fn sympad_margins(
    matrix: ArrayView2<f64>,
    pre_rows: usize,
    post_rows: usize,
    pre_cols: usize,
    post_cols: usize,
) -> Result<Array2<f64>> {
    sympad(
        matrix,
        PadWidth::new(pre_rows, post_rows, pre_cols, post_cols),
        PadMode::default(),
        ReflectType::default(),
    )
}

fn pad_axis(
    matrix: ArrayView2<f64>,
    axis: Axis,
    before: usize,
    after: usize,
    mode: PadMode,
    reflect: ReflectType,
) -> Result<Array2<f64>> {
    let len = matrix.len_of(axis);
    if before == 0 && after == 0 {
        return Ok(matrix.to_owned());
    }
    if len == 0 {
        return Err(BandanaError::ShapeMismatch(format!(
            "cannot pad an empty axis {} by ({}, {})",
            axis.index(),
            before,
            after
        )));
    }

    let mut shape = [matrix.nrows(), matrix.ncols()];
    shape[axis.index()] += before + after;
    let mut padded = Array2::<f64>::zeros(shape);

    for (src, mut dst) in matrix.lanes(axis).into_iter().zip(padded.lanes_mut(axis)) {
        let lane = pad_lane(&src.to_vec(), before, after, mode, reflect);
        dst.assign(&aview1(&lane));
    }

    Ok(padded)
}

/// 一维镜像扩展；`values` 非空
fn pad_lane(
    values: &[f64],
    before: usize,
    after: usize,
    mode: PadMode,
    reflect: ReflectType,
) -> Vec<f64> {
    let n = values.len();
    let total = before + n + after;
    let mut buf = vec![0.0; total];
    buf[before..before + n].copy_from_slice(values);

    // 单元素轴无法以 reflect 方式镜像，退化为重复边缘值
    if n == 1 && mode == PadMode::Reflect {
        buf[..before].fill(values[0]);
        buf[before + n..].fill(values[0]);
        return buf;
    }

    let edge_offset = match mode {
        PadMode::Reflect => 0,
        PadMode::Symmetric => 1,
    };

    let mut left = before;
    let mut right = after;

    // 每轮镜像的长度取原周期的整数倍，否则不等宽边距会镜像到非周期的窗口
    while left > 0 || right > 0 {
        let valid = total - left - right;
        let period = match mode {
            PadMode::Reflect => (valid - 1) / (n - 1) * (n - 1),
            PadMode::Symmetric => valid / n * n,
        };

        if left > 0 {
            let chunk = period.min(left);
            let edge = buf[left];
            let start = left - edge_offset + chunk;
            for i in 0..chunk {
                let mirrored = buf[start - i];
                buf[left - chunk + i] = match reflect {
                    ReflectType::Even => mirrored,
                    ReflectType::Odd => 2.0 * edge - mirrored,
                };
            }
            left -= chunk;
        }

        if right > 0 {
            let chunk = period.min(right);
            let last = total - right - 1;
            let edge = buf[last];
            let start = last + edge_offset - 1;
            for i in 0..chunk {
                let mirrored = buf[start - i];
                buf[last + 1 + i] = match reflect {
                    ReflectType::Even => mirrored,
                    ReflectType::Odd => 2.0 * edge - mirrored,
                };
            }
            right -= chunk;
        }
    }

    buf
}
