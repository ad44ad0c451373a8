//! # apply 命令实现
//!
//! 规范化目录条目名并应用到磁盘。
//!
//! ## 功能
//! - 列出工作目录条目（列出失败即终止，不产生任何输出）
//! - 预演模式只打印 `input -> output`，不修改文件系统
//! - 先同步创建输出目录，再并行复制/移动
//! - 汇总统计、失败表格与可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/apply.rs` 定义的参数
//! - 使用 `batch/`, `normalize/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{
    plan, report, BatchApplier, BatchReport, FailurePolicy, FileCollector, NamePair, OpKind,
    SkipReason, TaskOutcome,
};
use crate::cli::apply::ApplyArgs;
use crate::error::{FnfixError, Result};
use crate::normalize::Profile;
use crate::utils::{output, progress};

use std::path::Path;
use tabled::{Table, Tabled};

/// 失败表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 apply 命令
pub fn execute(args: ApplyArgs) -> Result<()> {
    let profile: Profile = args.profile.into();
    let kind = if args.move_files {
        OpKind::Move
    } else {
        OpKind::Copy
    };

    // 列出条目
    let mut collector = FileCollector::new(&args.dir).include_hidden(!args.skip_hidden);
    if let Some(pattern) = &args.pattern {
        collector = collector.with_pattern(pattern)?;
    }
    let names = collector.collect()?;

    let mode = if args.dry_run {
        "dry run".to_string()
    } else {
        kind.to_string()
    };
    output::print_header(&format!("Fixing names for {} ({})", profile, mode));

    if names.is_empty() {
        output::print_warning(&format!("No entries found under {}", args.dir.display()));
        return Ok(());
    }

    let pairs = plan::pair_names(&names, profile);
    let destination = plan::destination_dir(&args.dir, args.output.as_deref());

    if args.dry_run {
        for line in plan_header(kind, &destination, args.skip_hidden) {
            output::print_info(&line);
        }
        print_plan(&pairs);
        return Ok(());
    }

    plan::prepare_output_dir(&destination)?;
    let tasks = plan::build_tasks(&args.dir, &destination, &pairs, kind);

    let policy = if args.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::BestEffort
    };
    let applier = BatchApplier::new(args.jobs).with_policy(policy);

    output::print_info(&format!(
        "Applying {} task(s) into '{}' with {} worker(s), {:?}",
        tasks.len(),
        destination.display(),
        applier.jobs(),
        applier.policy()
    ));

    let pb = progress::create_progress_bar(tasks.len() as u64, "Applying");
    let batch = applier.apply_with(tasks, |result| {
        match &result.outcome {
            TaskOutcome::Failed(err) => pb.suspend(|| output::print_error(&err.detail())),
            TaskOutcome::Skipped(SkipReason::Directory) => pb.suspend(|| {
                output::print_skip(&format!(
                    "{} (directory)",
                    result.task.source().display()
                ))
            }),
            _ => {}
        }
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    if let Some(path) = &args.report {
        report::to_csv(&batch, path)?;
        output::print_info(&format!("Report written to '{}'", path.display()));
    }

    summarize(&batch)
}

/// 预演报告头：操作方式、目标目录与隐藏条目处理
fn plan_header(kind: OpKind, destination: &Path, skip_hidden: bool) -> Vec<String> {
    vec![
        format!("Operation: {}", kind),
        format!("Destination: {}", destination.display()),
        format!(
            "Hidden entries: {}",
            if skip_hidden { "skipped" } else { "included" }
        ),
    ]
}

/// 预演：打印将要改变的名字
fn print_plan(pairs: &[NamePair]) {
    let mut changed = 0;
    for pair in pairs.iter().filter(|p| p.is_changed()) {
        output::print_rename(&pair.input, pair.output.as_str());
        changed += 1;
    }

    output::print_done(&format!(
        "{} of {} name(s) would change (dry run, nothing written)",
        changed,
        pairs.len()
    ));
}

/// 打印汇总并把失败转换为错误
fn summarize(batch: &BatchReport) -> Result<()> {
    let summary = batch.summary;

    if summary.failed > 0 {
        let rows: Vec<FailureRow> = batch
            .failures()
            .filter_map(|r| match &r.outcome {
                TaskOutcome::Failed(err) => Some(FailureRow {
                    path: err.path().display().to_string(),
                    operation: r.task.kind().to_string(),
                    error: err.io_error().to_string(),
                }),
                _ => None,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if summary.cancelled > 0 {
        output::print_warning(&format!(
            "{} task(s) not started after the run was aborted",
            summary.cancelled
        ));
    }

    if summary.failed > 0 {
        return Err(FnfixError::BatchFailed {
            failed: summary.failed,
            total: summary.total(),
        });
    }

    output::print_success(&format!(
        "{} file(s) fixed, {} skipped",
        summary.succeeded, summary.skipped
    ));
    output::print_done(&format!("Processed {} entries", summary.total()));
    Ok(())
}
