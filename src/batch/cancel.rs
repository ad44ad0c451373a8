//! # 协作式取消
//!
//! 共享的取消标记。工作线程在开始每个任务前检查，
//! 已开始的任务总是完整执行。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 取消标记，可廉价克隆并在线程间共享
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消，尚未开始的任务将被记为 `Cancelled`
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
