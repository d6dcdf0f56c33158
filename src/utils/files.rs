//! # 能带文件收集
//!
//! 在目录中按 glob 模式收集能带文件（如 `band1001.out`），并按文件名中的数字编号排序，
//! 保证 `band1010.out` 排在 `band1002.out` 之后、`band10001.out` 之前。
//!
//! ## 依赖关系
//! - 被 `commands/{bands,plot}.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名, `regex` 提取编号

use bandana::error::{BandanaError, Result};

use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集匹配的能带文件，按编号排序
pub fn collect_band_files(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BandanaError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        BandanaError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let mut files = Vec::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    if files.is_empty() {
        return Err(BandanaError::NoFilesFound {
            pattern: format!("{}/{}", dir.display(), pattern),
        });
    }

    sort_by_index(&mut files);
    Ok(files)
}

/// 按文件名中最后一段数字排序；无数字的文件排在最后，同编号按路径排序
pub fn sort_by_index(files: &mut [PathBuf]) {
    // 模式为常量
    let digits = Regex::new(r"(\d+)\D*$").expect("valid regex");

    files.sort_by_cached_key(|path| {
        let index = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| digits.captures(name))
            .and_then(|c| c[1].parse::<u64>().ok());
        (index.is_none(), index, path.clone())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sort_by_index() {
        let mut files: Vec<PathBuf> = ["band1010.out", "notes.out", "band10001.out", "band1002.out"]
            .iter()
            .map(PathBuf::from)
            .collect();
        sort_by_index(&mut files);
        let names: Vec<&str> = files.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["band1002.out", "band1010.out", "band10001.out", "notes.out"]
        );
    }

    #[test]
    fn test_collect_band_files() {
        let dir = std::env::temp_dir().join(format!("bandana-collect-{}", std::process::id()));
        let nested = dir.join("spin_down");
        fs::create_dir_all(&nested).unwrap();
        for name in ["band1002.out", "band1001.out", "geometry.in"] {
            fs::write(dir.join(name), "0.0\n").unwrap();
        }
        fs::write(nested.join("band1003.out"), "0.0\n").unwrap();

        let flat = collect_band_files(&dir, "band*.out", false).unwrap();
        assert_eq!(flat.len(), 2);
        assert!(flat[0].ends_with("band1001.out"));

        let deep = collect_band_files(&dir, "band*.out", true).unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep[2].ends_with("band1003.out"));

        let none = collect_band_files(&dir, "*.xyz", false).unwrap_err();
        assert!(matches!(none, BandanaError::NoFilesFound { .. }));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_directory() {
        let err = collect_band_files(Path::new("/nonexistent/bands"), "*", false).unwrap_err();
        assert!(matches!(err, BandanaError::DirectoryNotFound { .. }));
    }
}
