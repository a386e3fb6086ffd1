// tests/common/mod.rs
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding one source file.
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn new(name: &str, contents: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::Builder::new()
            .prefix("tag_depth")
            .tempdir()
            .expect("create tempdir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        Self { _dir: dir, path }
    }

    /// File whose line `n` (1-based) is `lines[n - 1]`.
    pub fn from_lines(name: &str, lines: &[&str]) -> Self {
        Self::new(name, lines.join("\n") + "\n")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `count` filler lines with no tags.
pub fn filler(count: usize) -> Vec<&'static str> {
    vec!["const x = 1;"; count]
}
