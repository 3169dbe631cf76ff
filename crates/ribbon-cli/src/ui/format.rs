//! String formatting utilities for UI rendering.

use chrono::{DateTime, Utc};

use super::theme::{BAR_EMPTY, BAR_FILL};

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// First 8 characters of an instance id.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

pub fn format_datetime(dt: &DateTime<Utc>, human: bool) -> String {
    if human {
        dt.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        dt.to_rfc3339()
    }
}

/// Fixed-width completion bar, e.g. `#####.....`.
pub fn progress_bar(percent: u32, width: usize, unicode: bool) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!(
        "{}{}",
        BAR_FILL.get(unicode).repeat(filled),
        BAR_EMPTY.get(unicode).repeat(width - filled)
    )
}

/// Replace newlines with spaces for single-line output.
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("7a2e3c0b-1234-5678-9abc-def012345678"), "7a2e3c0b");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10, false), "..........");
        assert_eq!(progress_bar(50, 10, false), "#####.....");
        assert_eq!(progress_bar(100, 10, false), "##########");
        assert_eq!(progress_bar(250, 4, false), "####");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("hello\nworld"), "hello world");
    }
}
