use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tag_depth::cli::Args;
use tag_depth::config::Config;
use tag_depth::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    logging::init_tracing(config.log_level);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match tag_depth::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
