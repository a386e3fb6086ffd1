// crates/core/src/window.rs
//! 出力対象の行範囲
//!
//! `N-M`（両端を含む）、`N-`（終端なし）、`N`（1行のみ）の形式で指定します。

use std::fmt;
use std::str::FromStr;

use crate::error::ScanError;

/// Inclusive, 1-based line-number interval. `end == None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineWindow {
    start: usize,
    end: Option<usize>,
}

impl LineWindow {
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidWindow`] when `start` is zero or greater than `end`.
    pub fn new(start: usize, end: Option<usize>) -> Result<Self, ScanError> {
        if start == 0 {
            return Err(ScanError::InvalidWindow(
                "line numbers start at 1".to_string(),
            ));
        }
        if let Some(end) = end
            && start > end
        {
            return Err(ScanError::InvalidWindow(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn contains(&self, line_number: usize) -> bool {
        line_number >= self.start && self.end.is_none_or(|end| line_number <= end)
    }
}

impl FromStr for LineWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty line window".to_string());
        }

        let (start, end) = match s.split_once('-') {
            Some((start, "")) => (parse_bound(start)?, None),
            Some((start, end)) => (parse_bound(start)?, Some(parse_bound(end)?)),
            None => {
                let line = parse_bound(s)?;
                (line, Some(line))
            }
        };

        Self::new(start, end).map_err(|e| e.to_string())
    }
}

fn parse_bound(s: &str) -> Result<usize, String> {
    let s = s.trim();
    s.parse()
        .map_err(|_| format!("Invalid line number in window: '{s}'"))
}

impl fmt::Display for LineWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) if end == self.start => write!(f, "{}", self.start),
            Some(end) => write!(f, "{}-{end}", self.start),
            None => write!(f, "{}-", self.start),
        }
    }
}

/// A line is selected when any window contains it. An empty set selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSet(Vec<LineWindow>);

impl WindowSet {
    #[must_use]
    pub const fn new(windows: Vec<LineWindow>) -> Self {
        Self(windows)
    }

    #[must_use]
    pub fn contains(&self, line_number: usize) -> bool {
        self.0.iter().any(|w| w.contains(line_number))
    }

    /// A single open-ended window starting at line 1.
    #[must_use]
    pub fn every_line() -> Self {
        Self(vec![LineWindow {
            start: 1,
            end: None,
        }])
    }
}

impl Default for WindowSet {
    /// Lines 541..=609 and everything after 1460.
    fn default() -> Self {
        Self(vec![
            LineWindow {
                start: 541,
                end: Some(609),
            },
            LineWindow {
                start: 1461,
                end: None,
            },
        ])
    }
}

impl fmt::Display for WindowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}
