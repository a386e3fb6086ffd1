// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod scanner;
pub mod source;
pub mod tags;
pub mod window;

pub use error::{Result, ScanError};
pub use scanner::{DepthScanner, DepthTransition, ScanSummary, TextLines, WindowedScan, scan};
pub use source::read_source;
pub use tags::{CLOSE_TAGS, LineTally, OPEN_TAGS, tally};
pub use window::{LineWindow, WindowSet};
