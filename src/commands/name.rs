//! # name 命令实现
//!
//! 打印命令行中每个名字的规范化结果，不访问文件系统。
//!
//! ## 依赖关系
//! - 使用 `cli/name.rs` 定义的参数
//! - 使用 `normalize/`

use crate::cli::name::NameArgs;
use crate::error::Result;
use crate::normalize;
use crate::utils::output;

/// 执行 name 命令
pub fn execute(args: NameArgs) -> Result<()> {
    let profile = args.profile.into();
    for name in &args.names {
        let fixed = normalize::normalize(name, profile);
        output::print_rename(name, fixed.as_str());
    }
    Ok(())
}
