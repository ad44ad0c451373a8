//! # 日志初始化
//!
//! 安装输出到 stderr 的 `tracing-subscriber`。
//! 过滤规则优先取 `RUST_LOG`，否则由 `-v` 次数决定。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::EnvFilter;

/// `-v` 次数对应的默认过滤规则
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,fnfix=info",
        2 => "info,fnfix=debug",
        _ => "trace",
    }
}

/// 初始化日志到 stderr
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // 重复初始化（如测试中）时忽略错误
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_grows_with_verbosity() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(2).contains("debug"));
        assert_eq!(default_filter(9), "trace");
    }
}
