//! # 批量执行模块
//!
//! 把规范化后的文件名应用到磁盘：复制或移动，可并行执行。
//!
//! ## 功能
//! - 列出工作目录条目
//! - 规划 `(输入, 输出)` 任务
//! - 固定大小线程池并行执行，支持失败策略与协作式取消
//! - 结果统计与 CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 使用
//! - 使用 `normalize/` 生成目标文件名
//! - 使用 `rayon` 进行并行处理

pub mod cancel;
pub mod collector;
pub mod ops;
pub mod plan;
pub mod report;
pub mod runner;
pub mod task;

pub use cancel::CancelToken;
pub use collector::FileCollector;
pub use plan::NamePair;
pub use runner::{BatchApplier, BatchReport, BatchSummary, FailurePolicy};
pub use task::{BatchResult, BatchTask, OpKind, SkipReason, TaskError, TaskOutcome};
