//! ANSI-aware text measurement, truncation, and padding.
//!
//! Cell values may carry ANSI escape codes (callers sometimes pre-style
//! data). All functions here preserve the codes in output without counting
//! them toward display width.

use console::{measure_text_width, pad_str, Alignment};

/// Display width of a string in terminal columns.
///
/// Wraps `console::measure_text_width`: ANSI escape sequences are ignored,
/// CJK characters count as two columns, combining marks as zero.
///
/// # Example
///
/// ```rust
/// use trestle_grid::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncate from the end to fit `max_width`, appending `ellipsis`.
///
/// Strings that already fit are returned unchanged.
///
/// # Example
///
/// ```rust
/// use trestle_grid::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "…"), "Hello W…");
/// assert_eq!(truncate_end("Short", 10, "…"), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    let width = measure_text_width(s);
    if width <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width < ellipsis_width {
        return take_prefix(ellipsis, max_width);
    }
    if max_width == ellipsis_width {
        return ellipsis.to_string();
    }

    let mut result = take_prefix(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Truncate from the start to fit `max_width`, prepending `ellipsis`.
///
/// Keeps the end of the string visible. Useful for paths where the filename
/// matters more than the directory prefix.
///
/// # Example
///
/// ```rust
/// use trestle_grid::truncate_start;
///
/// assert_eq!(truncate_start("/path/to/file.rs", 12, "…"), "…/to/file.rs");
/// ```
pub fn truncate_start(s: &str, max_width: usize, ellipsis: &str) -> String {
    let width = measure_text_width(s);
    if width <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width < ellipsis_width {
        return take_prefix(ellipsis, max_width);
    }
    if max_width == ellipsis_width {
        return ellipsis.to_string();
    }

    let suffix = take_suffix(s, max_width - ellipsis_width);
    format!("{}{}", ellipsis, suffix)
}

/// Truncate in the middle to fit `max_width`, keeping both ends visible.
///
/// The split biases toward the end when the available space is odd.
///
/// # Example
///
/// ```rust
/// use trestle_grid::truncate_middle;
///
/// assert_eq!(truncate_middle("Hello World", 8, "…"), "Hel…orld");
/// ```
pub fn truncate_middle(s: &str, max_width: usize, ellipsis: &str) -> String {
    let width = measure_text_width(s);
    if width <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure_text_width(ellipsis);
    if max_width < ellipsis_width {
        return take_prefix(ellipsis, max_width);
    }
    if max_width == ellipsis_width {
        return ellipsis.to_string();
    }

    let available = max_width - ellipsis_width;
    let right_width = available.div_ceil(2);
    let left_width = available - right_width;

    let left = take_prefix(s, left_width);
    let right = take_suffix(s, right_width);
    format!("{}{}{}", left, ellipsis, right)
}

/// Pad on the left (right-align) to reach `width`. Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pad on the right (left-align) to reach `width`. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pad on both sides (center) to reach `width`; odd leftover goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Longest prefix of `s` with display width <= `max_width`.
///
/// ANSI escape sequences pass through without counting. Also serves as the
/// hard-clip primitive for `Overflow::Clip`.
pub(crate) fn take_prefix(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if measure_text_width(s) <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            result.push(c);
            in_escape = true;
            continue;
        }
        if in_escape {
            result.push(c);
            // CSI sequences terminate on a letter (@ through ~)
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Longest suffix of `s` with display width <= `max_width`.
fn take_suffix(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total_width = measure_text_width(s);
    if total_width <= max_width {
        return s.to_string();
    }

    // Walk from the start, skipping (total - max) display columns. Escape
    // bytes are consumed with whatever segment they precede.
    let skip_width = total_width - max_width;
    let mut current_width = 0;
    let mut byte_offset = 0;
    let mut in_escape = false;

    for (i, c) in s.char_indices() {
        if c == '\x1b' {
            in_escape = true;
            byte_offset = i + c.len_utf8();
            continue;
        }
        if in_escape {
            byte_offset = i + c.len_utf8();
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
            continue;
        }

        current_width += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        byte_offset = i + c.len_utf8();
        if current_width >= skip_width {
            break;
        }
    }

    s[byte_offset..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii_and_empty() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_ignores_ansi() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn truncate_end_basic() {
        assert_eq!(truncate_end("hello world", 8, "…"), "hello w…");
        assert_eq!(truncate_end("hello world", 6, "…"), "hello…");
        assert_eq!(truncate_end("hello", 10, "…"), "hello");
        assert_eq!(truncate_end("hello", 5, "…"), "hello");
    }

    #[test]
    fn truncate_end_multi_char_ellipsis() {
        assert_eq!(truncate_end("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn truncate_end_tiny_width() {
        assert_eq!(truncate_end("hello", 1, "…"), "…");
        assert_eq!(truncate_end("hello", 0, "…"), "");
    }

    #[test]
    fn truncate_end_preserves_ansi() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let result = truncate_end(styled, 8, "…");
        assert_eq!(display_width(&result), 8);
        assert!(result.contains("\x1b[31m"));
    }

    #[test]
    fn truncate_end_cjk_never_splits_wide_char() {
        // 3 CJK chars fit in 6 columns, ellipsis takes the 7th
        assert_eq!(truncate_end("日本語テスト", 7, "…"), "日本語…");
    }

    #[test]
    fn truncate_start_basic() {
        assert_eq!(truncate_start("hello world", 8, "…"), "…o world");
        assert_eq!(truncate_start("hello", 10, "…"), "hello");
    }

    #[test]
    fn truncate_start_keeps_path_suffix() {
        assert_eq!(truncate_start("/path/to/file.rs", 12, "…"), "…/to/file.rs");
    }

    #[test]
    fn truncate_start_tiny_width() {
        assert_eq!(truncate_start("hello", 1, "…"), "…");
        assert_eq!(truncate_start("hello", 0, "…"), "");
    }

    #[test]
    fn truncate_middle_basic() {
        assert_eq!(truncate_middle("hello world", 8, "…"), "hel…orld");
        assert_eq!(truncate_middle("hello", 10, "…"), "hello");
    }

    #[test]
    fn truncate_middle_multi_char_ellipsis() {
        assert_eq!(truncate_middle("abcdefghij", 7, "..."), "ab...ij");
    }

    #[test]
    fn truncate_middle_biases_toward_end() {
        // 5 columns available after the ellipsis: 2 left, 3 right
        assert_eq!(truncate_middle("abcdefghij", 6, "…"), "ab…hij");
    }

    #[test]
    fn truncate_middle_tiny_width() {
        assert_eq!(truncate_middle("hello", 1, "…"), "…");
        assert_eq!(truncate_middle("hello", 0, "…"), "");
    }

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("hello", 3), "hello");
        assert_eq!(pad_left("", 5), "     ");
    }

    #[test]
    fn pad_right_basic() {
        assert_eq!(pad_right("42", 5), "42   ");
        assert_eq!(pad_right("hello", 3), "hello");
    }

    #[test]
    fn pad_center_basic() {
        assert_eq!(pad_center("hi", 6), "  hi  ");
        assert_eq!(pad_center("hi", 5), " hi  ");
        assert_eq!(pad_center("hello", 3), "hello");
    }

    #[test]
    fn pad_preserves_ansi() {
        let styled = "\x1b[31mhi\x1b[0m";
        let result = pad_left(styled, 5);
        assert!(result.ends_with("\x1b[0m"));
        assert_eq!(display_width(&result), 5);
    }

    #[test]
    fn take_prefix_hard_clip() {
        assert_eq!(take_prefix("hello world", 5), "hello");
        assert_eq!(take_prefix("hello", 0), "");
        assert_eq!(take_prefix("hi", 5), "hi");
    }

    #[test]
    fn empty_string_operations() {
        assert_eq!(truncate_end("", 5, "…"), "");
        assert_eq!(truncate_start("", 5, "…"), "");
        assert_eq!(truncate_middle("", 5, "…"), "");
        assert_eq!(pad_left("", 0), "");
        assert_eq!(pad_right("", 0), "");
    }
}
