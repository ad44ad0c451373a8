//! # 结果报告导出
//!
//! 将批量运行结果导出为 CSV：每个任务一行。
//!
//! ## 依赖关系
//! - 被 `commands/apply.rs` 调用
//! - 使用 `batch/runner.rs` 的 `BatchReport`
//! - 使用 `csv` + `serde` 写入

use super::runner::BatchReport;
use super::task::TaskOutcome;
use crate::error::{FnfixError, Result};

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 行
#[derive(Debug, Serialize)]
struct ReportRow {
    source: String,
    destination: String,
    operation: String,
    status: &'static str,
    detail: String,
}

/// 写入任意 writer，`path` 用于错误信息
pub fn write_csv<W: Write>(report: &BatchReport, writer: W, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for result in &report.results {
        let detail = match &result.outcome {
            TaskOutcome::Skipped(reason) => reason.to_string(),
            TaskOutcome::Failed(err) => err.detail(),
            TaskOutcome::Succeeded | TaskOutcome::Cancelled => String::new(),
        };
        wtr.serialize(ReportRow {
            source: result.task.source().display().to_string(),
            destination: result.task.destination().display().to_string(),
            operation: result.task.kind().to_string(),
            status: result.outcome.label(),
            detail,
        })?;
    }

    wtr.flush().map_err(|e| FnfixError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 导出到文件
pub fn to_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path).map_err(|e| FnfixError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    write_csv(report, file, output_path)
}
