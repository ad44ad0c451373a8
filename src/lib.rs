//! # fnfix - 文件名修复工具
//!
//! 把文件名改写为在 Shell 和 URL 中都安全的形式，并可并行地把新名字应用到磁盘。
//!
//! ## 模块
//! - `normalize` - 文件名规范化（纯函数）
//! - `batch` - 目录列举、任务规划与并行复制/移动
//! - `cli` / `commands` - 命令行定义与执行
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── normalize/ (文件名规范化)
//!   │     └── batch/     (批量执行)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod normalize;
pub mod utils;

pub use batch::{BatchApplier, BatchReport, BatchResult, BatchTask, FailurePolicy, OpKind};
pub use error::{FnfixError, Result};
pub use normalize::{normalize, FixedName, Profile};
