//! # 批量执行器
//!
//! 在固定大小的工作线程池上并行执行复制/移动任务。
//!
//! ## 功能
//! - 基于 rayon 线程池，每个线程一次完整执行一个任务
//! - 结果按任务原始位置收集，另可通过回调流式获取
//! - 失败策略：`BestEffort` 执行全部任务；`FailFast` 首次失败后不再派发新任务
//! - 协作式取消：每个任务开始前检查 `CancelToken`
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `batch/ops.rs` 执行单个任务
//! - 使用 `rayon` 进行并行处理

use super::cancel::CancelToken;
use super::ops;
use super::task::{BatchResult, BatchTask, TaskOutcome};
use crate::error::Result;

use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// 自动模式下每个 CPU 对应的工作线程数（文件复制以 I/O 为主）
pub const DEFAULT_JOBS_PER_CPU: usize = 2;

/// 失败策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// 单个任务失败不影响其余任务
    #[default]
    BestEffort,
    /// 首次失败后停止派发，进行中的任务照常完成
    FailFast,
}

/// 批量处理结果统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub cancelled: usize,
}

impl BatchSummary {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Succeeded => self.succeeded += 1,
            TaskOutcome::Skipped(_) => self.skipped += 1,
            TaskOutcome::Failed(_) => self.failed += 1,
            TaskOutcome::Cancelled => self.cancelled += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed + self.cancelled
    }
}

/// 一次批量运行的完整报告
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 与输入任务一一对应，按原始位置排列
    pub results: Vec<BatchResult>,
    pub summary: BatchSummary,
}

impl BatchReport {
    fn from_results(results: Vec<BatchResult>) -> Self {
        let mut summary = BatchSummary::default();
        for result in &results {
            summary.merge(&result.outcome);
        }
        Self { results, summary }
    }

    /// 失败的任务
    pub fn failures(&self) -> impl Iterator<Item = &BatchResult> {
        self.results.iter().filter(|r| r.outcome.is_failed())
    }

    /// 没有失败且没有被取消的任务
    pub fn is_success(&self) -> bool {
        self.summary.failed == 0 && self.summary.cancelled == 0
    }
}

/// 批量执行器
#[derive(Debug, Clone)]
pub struct BatchApplier {
    /// 工作线程数
    jobs: usize,
    policy: FailurePolicy,
    cancel: CancelToken,
}

impl BatchApplier {
    /// 创建新的批量执行器，`jobs == 0` 表示自动
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 {
            num_cpus::get() * DEFAULT_JOBS_PER_CPU
        } else {
            jobs
        };
        Self {
            jobs,
            policy: FailurePolicy::default(),
            cancel: CancelToken::new(),
        }
    }

    /// 设置失败策略
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 使用外部取消标记
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// 并行执行全部任务
    pub fn apply(&self, tasks: Vec<BatchTask>) -> Result<BatchReport> {
        self.apply_with(tasks, |_| {})
    }

    /// 并行执行全部任务，每完成一个任务调用一次 `on_result`
    ///
    /// 回调在工作线程上执行，调用顺序即完成顺序。
    pub fn apply_with<F>(&self, tasks: Vec<BatchTask>, on_result: F) -> Result<BatchReport>
    where
        F: Fn(&BatchResult) + Sync + Send,
    {
        tracing::info!(
            tasks = tasks.len(),
            jobs = self.jobs,
            policy = ?self.policy,
            "starting batch"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("fnfix-worker-{}", i))
            .build()?;

        let halted = AtomicBool::new(false);

        let results: Vec<BatchResult> = pool.install(|| {
            tasks
                .into_par_iter()
                .enumerate()
                .map(|(index, task)| {
                    let outcome = if self.cancel.is_cancelled() || halted.load(Ordering::SeqCst)
                    {
                        TaskOutcome::Cancelled
                    } else {
                        ops::execute(&task)
                    };

                    if outcome.is_failed() && self.policy == FailurePolicy::FailFast {
                        halted.store(true, Ordering::SeqCst);
                    }

                    let result = BatchResult {
                        index,
                        task,
                        outcome,
                    };
                    on_result(&result);
                    result
                })
                .collect()
        });

        let report = BatchReport::from_results(results);
        if report.summary.cancelled > 0 {
            tracing::warn!(cancelled = report.summary.cancelled, "batch aborted early");
        }
        tracing::info!(summary = ?report.summary, "batch finished");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::task::{OpKind, SkipReason};
    use std::fs;
    use std::path::Path;
    use std::sync::atomic::AtomicUsize;
    use tempfile::TempDir;

    fn scenario(dir: &Path, kind: OpKind) -> Vec<BatchTask> {
        fs::write(dir.join("a.txt"), b"alpha").unwrap();
        fs::write(dir.join("b txt.png"), b"\x89PNG bytes").unwrap();
        vec![
            BatchTask::new(dir.join("a.txt"), dir.join("a.txt"), kind),
            BatchTask::new(dir.join("b txt.png"), dir.join("b_txt.png"), kind),
        ]
    }

    #[test]
    fn test_copy_scenario() {
        let dir = TempDir::new().unwrap();
        let tasks = scenario(dir.path(), OpKind::Copy);

        let report = BatchApplier::new(2).apply(tasks).unwrap();
        assert!(matches!(
            report.results[0].outcome,
            TaskOutcome::Skipped(SkipReason::Unchanged)
        ));
        assert!(matches!(report.results[1].outcome, TaskOutcome::Succeeded));
        assert_eq!(
            fs::read(dir.path().join("b_txt.png")).unwrap(),
            b"\x89PNG bytes"
        );
        assert!(dir.path().join("b txt.png").exists());
        assert!(report.is_success());
    }

    #[test]
    fn test_move_scenario() {
        let dir = TempDir::new().unwrap();
        let tasks = scenario(dir.path(), OpKind::Move);

        let report = BatchApplier::new(2).apply(tasks).unwrap();
        assert!(matches!(
            report.results[0].outcome,
            TaskOutcome::Skipped(SkipReason::Unchanged)
        ));
        assert!(matches!(report.results[1].outcome, TaskOutcome::Succeeded));
        assert!(!dir.path().join("b txt.png").exists());
        assert!(dir.path().join("a.txt").exists());
        assert_eq!(
            fs::read(dir.path().join("b_txt.png")).unwrap(),
            b"\x89PNG bytes"
        );
    }

    #[test]
    fn test_best_effort_partial_failure() {
        let dir = TempDir::new().unwrap();
        let mut tasks = Vec::new();
        for i in 0..8 {
            let from = dir.path().join(format!("file {}.txt", i));
            fs::write(&from, format!("content {}", i)).unwrap();
            tasks.push(BatchTask::new(
                from,
                dir.path().join(format!("file_{}.txt", i)),
                OpKind::Copy,
            ));
        }
        fs::write(dir.path().join("broken file.txt"), b"x").unwrap();
        tasks.insert(
            3,
            BatchTask::new(
                dir.path().join("broken file.txt"),
                dir.path().join("missing").join("broken_file.txt"),
                OpKind::Copy,
            ),
        );

        let report = BatchApplier::new(4).apply(tasks).unwrap();
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.summary.succeeded, 8);
        assert!(report.results[3].outcome.is_failed());
        assert_eq!(report.failures().count(), 1);
        assert!(!report.is_success());
        for i in 0..8 {
            assert!(dir.path().join(format!("file_{}.txt", i)).exists());
        }
    }

    #[test]
    fn test_results_indexed_by_position() {
        let dir = TempDir::new().unwrap();
        let mut tasks = Vec::new();
        for i in 0..32 {
            let from = dir.path().join(format!("n {}", i));
            fs::write(&from, [i as u8]).unwrap();
            tasks.push(BatchTask::new(from, dir.path().join(format!("n_{}", i)), OpKind::Move));
        }

        let report = BatchApplier::new(8).apply(tasks).unwrap();
        assert_eq!(report.results.len(), 32);
        for (i, result) in report.results.iter().enumerate() {
            assert_eq!(result.index, i);
            assert_eq!(
                result.task.destination(),
                dir.path().join(format!("n_{}", i)).as_path()
            );
        }
        assert_eq!(report.summary.succeeded, 32);
    }

    #[test]
    fn test_fail_fast_cancels_pending() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x 1"), b"1").unwrap();
        fs::write(dir.path().join("x 2"), b"2").unwrap();
        let tasks = vec![
            BatchTask::new(dir.path().join("gone"), dir.path().join("gone_"), OpKind::Copy),
            BatchTask::new(dir.path().join("x 1"), dir.path().join("x_1"), OpKind::Copy),
            BatchTask::new(dir.path().join("x 2"), dir.path().join("x_2"), OpKind::Copy),
        ];

        let report = BatchApplier::new(1)
            .with_policy(FailurePolicy::FailFast)
            .apply(tasks)
            .unwrap();
        assert!(report.results[0].outcome.is_failed());
        assert_eq!(report.summary.cancelled, 2);
        assert!(!dir.path().join("x_1").exists());
    }

    #[test]
    fn test_pre_cancelled_runs_nothing() {
        let dir = TempDir::new().unwrap();
        let tasks = scenario(dir.path(), OpKind::Move);
        let token = CancelToken::new();
        token.cancel();

        let report = BatchApplier::new(2)
            .with_cancel_token(token)
            .apply(tasks)
            .unwrap();
        assert_eq!(report.summary.cancelled, 2);
        assert!(dir.path().join("b txt.png").exists());
    }

    #[test]
    fn test_streaming_callback_can_cancel() {
        let dir = TempDir::new().unwrap();
        let mut tasks = Vec::new();
        for i in 0..3 {
            let from = dir.path().join(format!("s {}", i));
            fs::write(&from, b"s").unwrap();
            tasks.push(BatchTask::new(from, dir.path().join(format!("s_{}", i)), OpKind::Copy));
        }

        let applier = BatchApplier::new(1);
        let token = applier.cancel_token().clone();
        let seen = AtomicUsize::new(0);
        let report = applier
            .apply_with(tasks, |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                token.cancel();
            })
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(report.summary.succeeded, 1);
        assert_eq!(report.summary.cancelled, 2);
    }

    #[test]
    fn test_auto_jobs() {
        assert_eq!(BatchApplier::new(3).jobs(), 3);
        assert!(BatchApplier::new(0).jobs() >= DEFAULT_JOBS_PER_CPU);
        assert_eq!(BatchApplier::new(1).policy(), FailurePolicy::BestEffort);
        assert_eq!(
            BatchApplier::new(1)
                .with_policy(FailurePolicy::FailFast)
                .policy(),
            FailurePolicy::FailFast
        );
    }
}
