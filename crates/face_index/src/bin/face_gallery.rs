//! # Face Gallery
//!
//! Headless walk over a face gallery. Prints path data, draws nothing.
//!
//! ## Usage
//!
//! ```bash
//! face_gallery --reference 00112233445566778899aabb --start 0 --count 5
//! RUST_LOG=debug face_gallery --config gallery.toml
//! ```

use std::process::ExitCode;

use face_index::{cli::USAGE, parse_args, render_walk, CliCommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(CliCommand::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::Walk(config)) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match render_walk(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
