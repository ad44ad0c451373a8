//! # apply 子命令 CLI 定义
//!
//! 规范化目录中所有条目的文件名，并复制或移动到新名字。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/apply.rs`

use super::ProfileArg;
use clap::Args;
use std::path::PathBuf;

/// apply 子命令参数
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Working directory whose entries are fixed
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Target context for the fixed names
    #[arg(long, value_enum, default_value_t = ProfileArg::Shell, env = "FNFIX_PROFILE")]
    pub profile: ProfileArg,

    /// Move files instead of copying them
    #[arg(short = 'm', long = "move", default_value_t = false)]
    pub move_files: bool,

    /// Output directory, relative to DIR (default: fix in place)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print `input -> output` pairs; never touch the filesystem
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Glob pattern(s) for entries, comma separated
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Ignore entries whose name starts with '.'
    #[arg(long, default_value_t = false)]
    pub skip_hidden: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "FNFIX_JOBS")]
    pub jobs: usize,

    /// Stop dispatching new work after the first failure
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write a per-file CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}
