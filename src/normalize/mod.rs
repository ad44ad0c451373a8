//! # 文件名规范化模块
//!
//! 参考 <http://www.dwheeler.com/essays/fixing-unix-linux-filenames.html>，
//! 把任意 Unicode 文件名改写为在 Shell 或 URL 中都安全的名字。
//!
//! ## 处理管线
//! 1. 剥离控制字符
//! 2. 剥离特殊字符
//! 3. 空格替换为配置的分隔符
//! 4. 音译为 ASCII（仅 URL）
//! 5. 按 `.` 分段折叠并修剪分隔符
//! 6. 按码点截断（截断后重新修剪）
//! 7. 空结果回退为占位名
//!
//! 纯函数，无 I/O、无共享状态，结果幂等。
//!
//! ## 依赖关系
//! - 被 `batch/plan.rs` 和 `commands/` 使用
//! - 子模块: profile, stages, segment

pub mod profile;
pub mod segment;
pub mod stages;

pub use profile::Profile;

use std::borrow::Borrow;

/// 规范化后的文件名
///
/// 不含控制字符与特殊字符；每个 `.` 分段内无重复分隔符、
/// 首尾无分隔符；长度不超过配置上限；永不为空。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedName(String);

impl FixedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FixedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FixedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FixedName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<FixedName> for String {
    fn from(name: FixedName) -> Self {
        name.0
    }
}

impl PartialEq<str> for FixedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FixedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// 按配置规范化文件名
pub fn normalize(source: &str, profile: Profile) -> FixedName {
    let replacement = profile.replacement();

    let mut result = stages::clean(source, replacement);
    if profile.transliterates() {
        result = stages::clean(&stages::transliterate(&result), replacement);
    }
    result = segment::tidy(&result);

    let truncated = stages::truncate(&result, profile.max_len());
    if truncated.len() < result.len() {
        result = segment::tidy(truncated);
    }

    if result.is_empty() {
        result = profile.placeholder().to_string();
    }
    FixedName(result)
}

/// Shell 配置的快捷方式
pub fn fix_for_shell(source: &str) -> FixedName {
    normalize(source, Profile::Shell)
}

/// URL 配置的快捷方式
pub fn fix_for_url(source: &str) -> FixedName {
    normalize(source, Profile::Url)
}
