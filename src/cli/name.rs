//! # name 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/name.rs`

use super::ProfileArg;
use clap::Args;

/// name 子命令参数
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Names to fix
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Target context for the fixed names
    #[arg(long, value_enum, default_value_t = ProfileArg::Shell, env = "FNFIX_PROFILE")]
    pub profile: ProfileArg,
}
