//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `normalize/`, `batch/`, `utils/`
//! - 子模块: apply, name

pub mod apply;
pub mod name;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply(args) => apply::execute(args),
        Commands::Name(args) => name::execute(args),
    }
}
