//! # 目录条目收集器
//!
//! 列出工作目录中的条目名，作为规范化与批量执行的输入。
//!
//! ## 功能
//! - 仅列出直接子条目（文件与目录，目录在执行时跳过）
//! - glob 模式过滤（逗号分隔的多模式）
//! - 默认包含以 `.` 开头的隐藏条目，可选择忽略
//! - 任何遍历错误都是致命的
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式

use crate::error::{FnfixError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 目录条目收集器
pub struct FileCollector {
    /// 工作目录
    dir: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 是否包含隐藏条目
    include_hidden: bool,
}

impl FileCollector {
    /// 创建新的收集器
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            patterns: Vec::new(),
            include_hidden: true,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| FnfixError::InvalidPattern {
                    pattern: s.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// 设置是否包含隐藏条目
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// 收集所有匹配的条目名，按名称排序
    pub fn collect(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Err(FnfixError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| FnfixError::ListDirectory {
                path: self.dir.display().to_string(),
                source: e,
            })?;

            let Some(name) = entry.file_name().to_str() else {
                tracing::warn!(
                    entry = %entry.path().display(),
                    "skipping entry with non-UTF-8 name"
                );
                continue;
            };

            if self.matches(name) {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// 检查条目名是否满足隐藏规则和任一模式
    fn matches(&self, name: &str) -> bool {
        if !self.include_hidden && name.starts_with('.') {
            return false;
        }
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(name))
    }
}
