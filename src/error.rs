//! # 统一错误处理模块
//!
//! 定义 bandana 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bandana 统一错误类型
#[derive(Error, Debug)]
pub enum BandanaError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed record in {path} (line {line}): {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Marker {marker:?} not found in {path}")]
    MarkerNotFound { path: String, marker: String },

    #[error("No atom records (atom / atom_frac) found in {path}")]
    NoAtomRecords { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数组形状错误
    // ─────────────────────────────────────────────────────────────
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

impl BandanaError {
    /// 根据 I/O 错误类型区分 "文件不存在" 与其他读取失败
    pub fn from_read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            BandanaError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            BandanaError::FileReadError {
                path: path.display().to_string(),
                source,
            }
        }
    }

    /// 构造解析错误
    pub fn malformed(path: &str, line: usize, reason: impl Into<String>) -> Self {
        BandanaError::MalformedRecord {
            path: path.to_string(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BandanaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_read_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e = BandanaError::from_read(Path::new("geometry.in"), err);
        assert!(matches!(e, BandanaError::FileNotFound { ref path } if path == "geometry.in"));
    }

    #[test]
    fn test_from_read_other() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = BandanaError::from_read(Path::new("band1001.out"), err);
        assert!(matches!(e, BandanaError::FileReadError { .. }));
    }

    #[test]
    fn test_malformed_message() {
        let e = BandanaError::malformed("geometry.in", 3, "expected 5 fields");
        assert_eq!(
            e.to_string(),
            "Malformed record in geometry.in (line 3): expected 5 fields"
        );
    }
}
