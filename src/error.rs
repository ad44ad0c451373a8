//! # 统一错误处理模块
//!
//! 定义 fnfix 的运行级错误类型，使用 `thiserror` 派生。
//! 单个任务的文件系统错误见 `batch/task.rs` 中的 `TaskError`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fnfix 统一错误类型
#[derive(Error, Debug)]
pub enum FnfixError {
    // ─────────────────────────────────────────────────────────────
    // 输入错误（在任何任务运行前终止）
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to list directory: {path}")]
    ListDirectory {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create output directory: {path}")]
    CreateOutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Output path exists and is not a directory: {path}")]
    OutputNotDirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{failed} of {total} task(s) failed")]
    BatchFailed { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // 报告错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FnfixError>;

/// 拼接错误及其全部底层原因
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // 包装型错误（如 csv::Error）的 Display 与其 source 相同
        if !msg.ends_with(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}
