//! # 批量任务与结果类型
//!
//! 定义单个文件操作任务、其执行结果以及任务级错误。
//!
//! ## 任务状态
//! `Pending -> Running -> {Succeeded, Skipped, Failed}`，
//! 运行被中止时尚未开始的任务直接记为 `Cancelled`。不做自动重试。
//!
//! ## 依赖关系
//! - 被 `batch/plan.rs`, `batch/ops.rs`, `batch/runner.rs` 使用
//! - 使用 `thiserror` 定义 `TaskError`

use std::path::{Path, PathBuf};
use thiserror::Error;

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// 复制，保留源文件
    Copy,
    /// 复制后删除源文件
    Move,
}

impl std::fmt::Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpKind::Copy => write!(f, "copy"),
            OpKind::Move => write!(f, "move"),
        }
    }
}

/// 单个文件操作任务，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTask {
    source: PathBuf,
    destination: PathBuf,
    kind: OpKind,
}

impl BatchTask {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>, kind: OpKind) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// 目标文件名与源文件名相同，无需任何文件系统操作
    pub fn is_unchanged(&self) -> bool {
        self.source.file_name() == self.destination.file_name()
    }
}

/// 跳过原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 文件名无变化
    Unchanged,
    /// 源路径是目录
    Directory,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unchanged => write!(f, "name unchanged"),
            SkipReason::Directory => write!(f, "is a directory"),
        }
    }
}

/// 任务级文件系统错误
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Failed to inspect source: {path}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open source: {path}")]
    OpenSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create destination: {path}")]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} -> {to}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to sync destination: {path}")]
    SyncDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Copied but failed to remove source: {path}")]
    RemoveSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// 出错的路径
    pub fn path(&self) -> &Path {
        match self {
            TaskError::Inspect { path, .. }
            | TaskError::OpenSource { path, .. }
            | TaskError::CreateDestination { path, .. }
            | TaskError::SyncDestination { path, .. }
            | TaskError::RemoveSource { path, .. } => path,
            TaskError::Copy { to, .. } => to,
        }
    }

    /// 底层 I/O 错误
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            TaskError::Inspect { source, .. }
            | TaskError::OpenSource { source, .. }
            | TaskError::CreateDestination { source, .. }
            | TaskError::Copy { source, .. }
            | TaskError::SyncDestination { source, .. }
            | TaskError::RemoveSource { source, .. } => source,
        }
    }

    /// 包含底层原因的完整描述
    pub fn detail(&self) -> String {
        format!("{}: {}", self, self.io_error())
    }
}

/// 任务最终状态
#[derive(Debug)]
pub enum TaskOutcome {
    Succeeded,
    Skipped(SkipReason),
    Failed(TaskError),
    /// 运行中止，任务未开始
    Cancelled,
}

impl TaskOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            TaskOutcome::Succeeded => "succeeded",
            TaskOutcome::Skipped(_) => "skipped",
            TaskOutcome::Failed(_) => "failed",
            TaskOutcome::Cancelled => "cancelled",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskOutcome::Failed(_))
    }
}

/// 单个任务的执行结果
#[derive(Debug)]
pub struct BatchResult {
    /// 任务在输入列表中的位置
    pub index: usize,
    pub task: BatchTask,
    pub outcome: TaskOutcome,
}
