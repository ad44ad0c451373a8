//! # 分段折叠与修剪
//!
//! 以 `.` 切分文件名，对每一段独立地：
//! - 将连续重复的分隔符（`-`、`_`、空格）折叠为一个
//! - 去除首尾的分隔符
//!
//! 每段只做一次线性扫描，空段及其位置保留（如 `.bashrc`）。
//!
//! ## 依赖关系
//! - 被 `normalize/mod.rs` 调用
//! - 无外部模块依赖

/// 分隔符集合
pub const SEPARATORS: [char; 3] = ['-', '_', ' '];

/// 是否为分隔符
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// 对每个 `.` 分段执行折叠与修剪，再以 `.` 重新拼接
pub fn tidy(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (i, segment) in source.split('.').enumerate() {
        if i > 0 {
            out.push('.');
        }
        tidy_segment(segment, &mut out);
    }
    out
}

/// 单段扫描
///
/// 首部分隔符直接丢弃；中间的分隔符先暂存（同字符连续出现只保留一个），
/// 遇到非分隔符时才写出，因此尾部分隔符自然被丢弃。
fn tidy_segment(segment: &str, out: &mut String) {
    let mut pending = String::new();
    let mut last: Option<char> = None;
    let mut started = false;

    for c in segment.chars() {
        if is_separator(c) {
            if !started || last == Some(c) {
                continue;
            }
            pending.push(c);
        } else {
            out.push_str(&pending);
            pending.clear();
            out.push(c);
            started = true;
        }
        last = Some(c);
    }
}
