//! # 字符级处理阶段
//!
//! 规范化管线中与分段无关的各个阶段：
//! 剥离控制字符、剥离特殊字符、替换空格、音译、截断。
//!
//! ## 依赖关系
//! - 被 `normalize/mod.rs` 按顺序调用
//! - 使用 `deunicode` 查表音译

/// 在 Shell 或 URL 中会引起问题的特殊字符集合
pub const SPECIAL: &str = "[]{}()<>;:,\\|/*?¿¡\"'~!@#$%^&=+";

/// 是否属于特殊字符集合
pub fn is_special(c: char) -> bool {
    SPECIAL.contains(c)
}

/// 移除所有控制字符（Unicode Cc 类）
pub fn strip_control(source: &str) -> String {
    source.chars().filter(|c| !c.is_control()).collect()
}

/// 移除所有特殊字符
pub fn strip_special(source: &str) -> String {
    source.chars().filter(|&c| !is_special(c)).collect()
}

/// 将空格替换为指定字符
pub fn replace_spaces(source: &str, replacement: char) -> String {
    source
        .chars()
        .map(|c| if c == ' ' { replacement } else { c })
        .collect()
}

/// 依次执行前三个阶段
pub fn clean(source: &str, replacement: char) -> String {
    replace_spaces(&strip_special(&strip_control(source)), replacement)
}

/// 将非 ASCII 字符音译为 ASCII，无映射的字符被丢弃
///
/// 音译表的条目可能包含空格或标点（如 `©` -> `(c)`），
/// 调用方需要对结果重新执行 [`clean`]。
pub fn transliterate(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for c in source.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(ascii) = deunicode::deunicode_char(c) {
            out.push_str(ascii);
        }
    }
    out
}

/// 按码点截断到 `max_len`
pub fn truncate(source: &str, max_len: usize) -> &str {
    match source.char_indices().nth(max_len) {
        Some((idx, _)) => &source[..idx],
        None => source,
    }
}
