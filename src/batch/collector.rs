//! # 文件收集器
//!
//! 展开 glob 模式，收集去重后的待处理文件集合。
//!
//! ## 功能
//! - 支持多个 glob 模式（`*`、`?`、`[...]`、`**` 由 glob crate 提供）
//! - 多模式命中同一路径时只保留一份
//! - 在任何处理开始前完整构建集合
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `glob` crate 展开模式
//! - 使用 `error.rs`

use crate::error::{ImgextError, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// 文件收集器
pub struct FileCollector {
    /// glob 模式列表
    patterns: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// 展开全部模式并按路径去重
    ///
    /// 模式语法错误是致命错误；遍历中读不到的目录项直接跳过。
    /// 返回的集合在任何重命名发生前就已固定，运行期间的重命名
    /// 不会让文件以新名字被再次匹配。
    pub fn collect(&self) -> Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();

        for pattern in &self.patterns {
            let matches = glob::glob(pattern).map_err(|e| ImgextError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;

            for path in matches.filter_map(|entry| entry.ok()) {
                files.insert(path);
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &std::path::Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_collect_matches_pattern() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "notes.txt");

        let pattern = format!("{}/*.png", dir.path().display());
        let files = FileCollector::new([pattern]).collect().unwrap();

        assert_eq!(files.len(), 1);
        assert!(files.contains(&dir.path().join("a.png")));
    }

    #[test]
    fn test_overlapping_patterns_deduplicate() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "photo.png");

        let base = dir.path().display();
        let files = FileCollector::new([
            format!("{}/*", base),
            format!("{}/*.png", base),
            format!("{}/photo.*", base),
        ])
        .collect()
        .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let result = FileCollector::new(["[unclosed"]).collect();
        match result {
            Err(ImgextError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "[unclosed"),
            Err(other) => panic!("expected InvalidPattern, got {}", other),
            Ok(_) => panic!("expected InvalidPattern, got Ok"),
        }
    }

    #[test]
    fn test_no_matches_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.nothing", dir.path().display());
        let files = FileCollector::new([pattern]).collect().unwrap();
        assert!(files.is_empty());
    }
}
