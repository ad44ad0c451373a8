//! # 单任务文件操作
//!
//! 执行一个 `BatchTask`：复制或移动，并在记录结果前显式关闭所有句柄。
//!
//! ## 功能
//! - 文件名未变化时直接跳过，不触碰文件系统
//! - 源为目录时跳过
//! - 复制：只读打开源 → 创建目标 → 流式复制 → 同步 → 关闭
//! - 移动：复制完成且目标同步后才删除源
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `batch/task.rs` 的任务与错误类型

use super::task::{BatchTask, OpKind, SkipReason, TaskError, TaskOutcome};

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// 执行单个任务
pub fn execute(task: &BatchTask) -> TaskOutcome {
    execute_with(task, |path: &Path| fs::remove_file(path))
}

/// 执行单个任务，移动时用 `remove_source` 删除源文件
fn execute_with<R>(task: &BatchTask, remove_source: R) -> TaskOutcome
where
    R: Fn(&Path) -> io::Result<()>,
{
    if task.is_unchanged() {
        tracing::debug!(source = %task.source().display(), "name unchanged, skipping");
        return TaskOutcome::Skipped(SkipReason::Unchanged);
    }

    match run(task, remove_source) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(error = %err.detail(), "{} failed", task.kind());
            TaskOutcome::Failed(err)
        }
    }
}

fn run<R>(task: &BatchTask, remove_source: R) -> Result<TaskOutcome, TaskError>
where
    R: Fn(&Path) -> io::Result<()>,
{
    let metadata = fs::metadata(task.source()).map_err(|e| TaskError::Inspect {
        path: task.source().to_path_buf(),
        source: e,
    })?;

    if metadata.is_dir() {
        tracing::info!(source = %task.source().display(), "source is a directory, skipping");
        return Ok(TaskOutcome::Skipped(SkipReason::Directory));
    }

    copy_file(task.source(), task.destination())?;

    if task.kind() == OpKind::Move {
        remove_source(task.source()).map_err(|e| TaskError::RemoveSource {
            path: task.source().to_path_buf(),
            source: e,
        })?;
    }

    tracing::debug!(
        source = %task.source().display(),
        destination = %task.destination().display(),
        "{} done",
        task.kind()
    );
    Ok(TaskOutcome::Succeeded)
}

/// 流式复制文件内容，返回复制的字节数
///
/// 目标的父目录必须已存在。返回前两个句柄都已关闭。
pub fn copy_file(from: &Path, to: &Path) -> Result<u64, TaskError> {
    let source = File::open(from).map_err(|e| TaskError::OpenSource {
        path: from.to_path_buf(),
        source: e,
    })?;
    let destination = File::create(to).map_err(|e| TaskError::CreateDestination {
        path: to.to_path_buf(),
        source: e,
    })?;

    let copy_err = |e: io::Error| TaskError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };

    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(destination);
    let bytes = io::copy(&mut reader, &mut writer).map_err(copy_err)?;
    writer.flush().map_err(copy_err)?;
    drop(reader);

    let destination = writer.into_inner().map_err(|e| copy_err(e.into_error()))?;
    destination.sync_all().map_err(|e| TaskError::SyncDestination {
        path: to.to_path_buf(),
        source: e,
    })?;
    drop(destination);

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_file_streams_bytes() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("src.bin");
        let to = dir.path().join("dst.bin");
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&from, &data).unwrap();

        let bytes = copy_file(&from, &to).unwrap();
        assert_eq!(bytes, data.len() as u64);
        assert_eq!(fs::read(&to).unwrap(), data);
        assert!(from.exists());
    }

    #[test]
    fn test_copy_into_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("a.txt");
        fs::write(&from, b"a").unwrap();

        let err = copy_file(&from, &dir.path().join("missing").join("a.txt")).unwrap_err();
        assert!(matches!(err, TaskError::CreateDestination { .. }));
    }

    #[test]
    fn test_missing_source_fails_inspect() {
        let dir = TempDir::new().unwrap();
        let task = BatchTask::new(
            dir.path().join("gone.txt"),
            dir.path().join("gone_2.txt"),
            OpKind::Copy,
        );
        assert!(matches!(
            execute(&task),
            TaskOutcome::Failed(TaskError::Inspect { .. })
        ));
    }

    #[test]
    fn test_directory_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("my dir");
        fs::create_dir(&sub).unwrap();

        let task = BatchTask::new(&sub, dir.path().join("my_dir"), OpKind::Move);
        assert!(matches!(
            execute(&task),
            TaskOutcome::Skipped(SkipReason::Directory)
        ));
        assert!(sub.is_dir());
        assert!(!dir.path().join("my_dir").exists());
    }

    #[test]
    fn test_unchanged_touches_nothing() {
        // 源文件不存在也应跳过，说明没有文件系统调用
        let task = BatchTask::new("/nonexistent/a.txt", "/nonexistent/a.txt", OpKind::Move);
        assert!(matches!(
            execute(&task),
            TaskOutcome::Skipped(SkipReason::Unchanged)
        ));
    }

    #[test]
    fn test_move_with_failed_removal_is_failed() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("locked file.txt");
        let to = dir.path().join("locked_file.txt");
        fs::write(&from, b"keep me").unwrap();

        let task = BatchTask::new(&from, &to, OpKind::Move);
        let outcome = execute_with(&task, |_: &Path| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only directory"))
        });

        match outcome {
            TaskOutcome::Failed(TaskError::RemoveSource { path, .. }) => assert_eq!(path, from),
            other => panic!("expected removal failure, got {:?}", other),
        }
        assert!(from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"keep me");
    }

    #[test]
    fn test_move_removes_source() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("b txt.png");
        let to = dir.path().join("b_txt.png");
        fs::write(&from, b"png bytes").unwrap();

        let task = BatchTask::new(&from, &to, OpKind::Move);
        assert!(matches!(execute(&task), TaskOutcome::Succeeded));
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"png bytes");
    }
}
