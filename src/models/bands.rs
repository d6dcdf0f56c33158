//! # 能带索引数据模型
//!
//! HOMO/LUMO 在能带文件中的列索引。
//!
//! ## 依赖关系
//! - 被 `parsers/homo_lumo.rs` 和 `commands/bands.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 能带文件中前四列为 k 点序号与坐标 (index, kx, ky, kz)
const LEADING_COLUMNS: usize = 4;

/// HOMO/LUMO 列索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandIndices {
    /// 标记行给出的态编号 (第一个占据数为 0 的态)
    pub first_empty_state: usize,

    /// HOMO 所在列
    pub homo: usize,

    /// LUMO 所在列
    pub lumo: usize,
}

impl BandIndices {
    /// 由态编号 n 计算列索引，每个态在能带文件中占 (占据数, 能量) 两列。
    /// n 必须 >= 1。
    pub fn from_state(n: usize) -> Self {
        BandIndices {
            first_empty_state: n,
            homo: LEADING_COLUMNS + 2 * (n - 1) - 1,
            lumo: LEADING_COLUMNS + 2 * n - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_state() {
        let idx = BandIndices::from_state(7);
        assert_eq!(idx.homo, 15);
        assert_eq!(idx.lumo, 17);
    }

    #[test]
    fn test_first_state() {
        let idx = BandIndices::from_state(1);
        assert_eq!(idx.homo, 3);
        assert_eq!(idx.lumo, 5);
    }
}
