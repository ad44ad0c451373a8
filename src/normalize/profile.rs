//! # 规范化配置
//!
//! 定义目标上下文（Shell / URL）及其差异化参数：
//! 替换字符、是否音译、最大长度与占位名。
//!
//! ## 依赖关系
//! - 被 `normalize/mod.rs` 使用
//! - 被 `cli/` 通过 `ProfileArg` 转换得到

/// Shell 文件名最大长度（按 Unicode 码点计）
pub const MAX_LEN_SHELL: usize = 255;

/// URL 文件名最大长度（按 Unicode 码点计）
pub const MAX_LEN_URL: usize = 128;

/// 全部字符被剥离时 Shell 使用的占位名
pub const NO_NAME_SHELL: &str = "FN_NO_NAME";

/// 全部字符被剥离时 URL 使用的占位名
pub const NO_NAME_URL: &str = "FN-NO-NAME";

/// 规范化目标上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// 空格替换为 `_`，保留非 ASCII 字母
    #[default]
    Shell,
    /// 空格替换为 `-`，音译为 ASCII
    Url,
}

impl Profile {
    /// 空格的替换字符
    pub const fn replacement(self) -> char {
        match self {
            Profile::Shell => '_',
            Profile::Url => '-',
        }
    }

    /// 最大长度（码点）
    pub const fn max_len(self) -> usize {
        match self {
            Profile::Shell => MAX_LEN_SHELL,
            Profile::Url => MAX_LEN_URL,
        }
    }

    /// 空结果的占位名
    pub const fn placeholder(self) -> &'static str {
        match self {
            Profile::Shell => NO_NAME_SHELL,
            Profile::Url => NO_NAME_URL,
        }
    }

    /// 是否执行 ASCII 音译
    pub const fn transliterates(self) -> bool {
        matches!(self, Profile::Url)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Shell => write!(f, "shell"),
            Profile::Url => write!(f, "url"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parameters() {
        assert_eq!(Profile::Shell.replacement(), '_');
        assert_eq!(Profile::Url.replacement(), '-');
        assert_eq!(Profile::Shell.max_len(), 255);
        assert_eq!(Profile::Url.max_len(), 128);
        assert!(Profile::Url.transliterates());
        assert!(!Profile::Shell.transliterates());
    }

    #[test]
    fn test_placeholders_use_profile_separator() {
        assert!(Profile::Shell
            .placeholder()
            .contains(Profile::Shell.replacement()));
        assert!(Profile::Url.placeholder().contains(Profile::Url.replacement()));
    }
}
