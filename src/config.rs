// src/config.rs
use crate::cli::Args;
use derive_builder::Builder;
use std::path::PathBuf;
use tag_depth_core::WindowSet;
use tracing::Level;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub windows: WindowSet,
    #[builder(default)]
    pub print_all: bool,
    #[builder(default = "Level::WARN")]
    pub log_level: Level,
}

impl Config {
    /// Windows actually printed; `--all` widens them to every line.
    #[must_use]
    pub fn effective_windows(&self) -> WindowSet {
        if self.print_all {
            WindowSet::every_line()
        } else {
            self.windows.clone()
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // --window が無ければ既定の範囲
        let windows = if args.windows.is_empty() {
            WindowSet::default()
        } else {
            WindowSet::new(args.windows)
        };

        Self {
            path: args.file,
            windows,
            print_all: args.all,
            log_level: level_from_verbosity(args.verbose),
        }
    }
}

const fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
