//! # 任务规划
//!
//! 把目录条目名经规范化后配对为 `(输入, 输出)`，再展开为 `BatchTask`。
//!
//! ## 功能
//! - 规范化所有条目名（预演模式直接打印这些配对）
//! - 输出目录相对于工作目录解析，缺省为原地改名
//! - 在派发任何任务前同步创建输出目录
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `normalize/` 生成新文件名
//! - 产出 `batch/task.rs` 的任务

use super::task::{BatchTask, OpKind};
use crate::error::{FnfixError, Result};
use crate::normalize::{self, FixedName, Profile};

use std::fs;
use std::path::{Path, PathBuf};

/// 一个条目名及其规范化结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub input: String,
    pub output: FixedName,
}

impl NamePair {
    pub fn is_changed(&self) -> bool {
        self.input != self.output.as_str()
    }
}

/// 规范化全部条目名，保持输入顺序
pub fn pair_names<S: AsRef<str>>(names: &[S], profile: Profile) -> Vec<NamePair> {
    names
        .iter()
        .map(|name| NamePair {
            input: name.as_ref().to_string(),
            output: normalize::normalize(name.as_ref(), profile),
        })
        .collect()
}

/// 解析目标目录：`output_dir` 相对于 `workdir`，缺省为 `workdir` 本身
pub fn destination_dir(workdir: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => workdir.join(dir),
        None => workdir.to_path_buf(),
    }
}

/// 展开为批量任务
pub fn build_tasks(
    workdir: &Path,
    destination: &Path,
    pairs: &[NamePair],
    kind: OpKind,
) -> Vec<BatchTask> {
    pairs
        .iter()
        .map(|pair| {
            BatchTask::new(
                workdir.join(&pair.input),
                destination.join(pair.output.as_str()),
                kind,
            )
        })
        .collect()
}

/// 创建输出目录，已存在视为成功
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| FnfixError::CreateOutputDir {
        path: dir.display().to_string(),
        source: e,
    })?;

    if !dir.is_dir() {
        return Err(FnfixError::OutputNotDirectory {
            path: dir.display().to_string(),
        });
    }

    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}
