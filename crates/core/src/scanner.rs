// crates/core/src/scanner.rs
//! 行ごとの深さ追跡
//!
//! ファイル全体を1行ずつ処理し、タグの開閉数から現在の深さを更新します。
//! 出力対象外の行でも深さは必ず更新されます。

use tracing::trace;

use crate::tags::tally;
use crate::window::WindowSet;

/// 1行分の深さ遷移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthTransition<'a> {
    /// 1始まりの行番号
    pub line_number: usize,
    pub prev_depth: i64,
    pub depth: i64,
    /// 改行を除いた行の内容
    pub text: &'a str,
}

impl<'a> DepthTransition<'a> {
    /// Line text with leading and trailing whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Lines split on `\r\n`, `\r` and `\n` with the terminator removed.
///
/// A terminator at the very end of the text does not start another line.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    rest: &'a str,
}

impl<'a> TextLines<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for TextLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let Some(pos) = self.rest.find(['\r', '\n']) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..pos];
        let terminator = if self.rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[pos + terminator..];
        Some(line)
    }
}

/// Lazy iterator of depth transitions over every line of `text`.
///
/// Lines are split by [`TextLines`]. Depth starts at zero and is never clamped.
#[derive(Debug, Clone)]
pub struct DepthScanner<'a> {
    lines: TextLines<'a>,
    line_number: usize,
    depth: i64,
}

impl<'a> DepthScanner<'a> {
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self {
            lines: TextLines::new(text),
            line_number: 0,
            depth: 0,
        }
    }

    /// Running depth after the last line yielded.
    #[must_use]
    pub const fn depth(&self) -> i64 {
        self.depth
    }

    /// Number of lines processed so far.
    #[must_use]
    pub const fn lines_seen(&self) -> usize {
        self.line_number
    }

    /// Process one line and return its transition.
    pub fn process_line(&mut self, line: &'a str) -> DepthTransition<'a> {
        self.line_number += 1;
        let prev_depth = self.depth;
        self.depth += tally(line).delta();

        trace!(
            line = self.line_number,
            prev_depth,
            depth = self.depth,
            "line processed"
        );

        DepthTransition {
            line_number: self.line_number,
            prev_depth,
            depth: self.depth,
            text: line,
        }
    }
}

impl<'a> Iterator for DepthScanner<'a> {
    type Item = DepthTransition<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(self.process_line(line))
    }
}

/// Depth scanner that only yields lines inside a [`WindowSet`].
///
/// Depth still accumulates across the lines that are filtered out.
#[derive(Debug, Clone)]
pub struct WindowedScan<'a, 'w> {
    scanner: DepthScanner<'a>,
    windows: &'w WindowSet,
}

impl WindowedScan<'_, '_> {
    /// Running depth after the last line processed, printed or not.
    #[must_use]
    pub const fn depth(&self) -> i64 {
        self.scanner.depth()
    }

    #[must_use]
    pub const fn lines_seen(&self) -> usize {
        self.scanner.lines_seen()
    }
}

impl<'a> Iterator for WindowedScan<'a, '_> {
    type Item = DepthTransition<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let windows = self.windows;
        self.scanner.find(|t| windows.contains(t.line_number))
    }
}

/// Scan `text` and keep only transitions whose line falls in `windows`.
#[must_use]
pub const fn scan<'a, 'w>(text: &'a str, windows: &'w WindowSet) -> WindowedScan<'a, 'w> {
    WindowedScan {
        scanner: DepthScanner::new(text),
        windows,
    }
}

/// End-of-run totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub final_depth: i64,
    pub printed: usize,
}
