// crates/core/src/tags.rs
//! 追跡対象タグの集計
//!
//! `div` と `DashboardLayout` の開始/終了タグをリテラル部分文字列として数えます。
//! 文字列リテラルやコメント内のタグも区別せずに数え、行をまたぐタグは検出しません。

/// Opening patterns. `"<div "` keeps its trailing space, so `<div` followed by a
/// tab or end of line matches nothing.
pub const OPEN_TAGS: [&str; 3] = ["<div ", "<div>", "<DashboardLayout>"];

/// Closing patterns.
pub const CLOSE_TAGS: [&str; 2] = ["</div>", "</DashboardLayout>"];

/// 1行分のタグ集計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineTally {
    pub opens: usize,
    pub closes: usize,
}

impl LineTally {
    /// Net change this line applies to the running depth.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn delta(self) -> i64 {
        self.opens as i64 - self.closes as i64
    }
}

/// Count tracked tags in `line`.
///
/// Each pattern is counted separately with non-overlapping, case-sensitive
/// matching and the per-pattern counts are summed.
#[must_use]
pub fn tally(line: &str) -> LineTally {
    LineTally {
        opens: count_all(line, &OPEN_TAGS),
        closes: count_all(line, &CLOSE_TAGS),
    }
}

fn count_all(line: &str, patterns: &[&str]) -> usize {
    patterns.iter().map(|p| line.matches(p).count()).sum()
}
