// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// 入力ファイルが存在しない・読めない・UTF-8 として復号できない
    #[error("Failed to read file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid line window: {0}")]
    InvalidWindow(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
