//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `apply`: 规范化目录中的文件名并复制/移动（或仅预演）
//! - `name`: 规范化命令行给出的名字并打印结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: apply, name

pub mod apply;
pub mod name;

use crate::normalize::Profile;
use clap::{Parser, Subcommand, ValueEnum};

/// fnfix - 文件名修复工具
#[derive(Parser)]
#[command(name = "fnfix")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Fix filenames so they are safe for shells and URLs", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Fix every filename in a directory (copy or move), or preview with --dry-run
    Apply(apply::ApplyArgs),

    /// Print the fixed form of the given names
    Name(name::NameArgs),
}

/// 目标上下文
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ProfileArg {
    /// Spaces become '_', non-ASCII letters are kept, max 255 characters
    #[default]
    Shell,
    /// Spaces become '-', text is transliterated to ASCII, max 128 characters
    Url,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Shell => Profile::Shell,
            ProfileArg::Url => Profile::Url,
        }
    }
}

impl std::fmt::Display for ProfileArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Profile::from(*self).fmt(f)
    }
}
