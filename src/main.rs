//! # fnfix 命令行入口
//!
//! ## 子命令
//! - `apply` - 修复目录中的文件名（复制/移动/预演）
//! - `name`  - 打印给定名字的修复结果

use clap::Parser;
use fnfix::cli::Cli;
use fnfix::error::error_chain;
use fnfix::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&error_chain(&e));
        std::process::exit(1);
    }
}
