//! Textcanvas
//!
//! Interactive drawing canvas. Reads one command per line from stdin and
//! prints the canvas after every accepted command.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use textcanvas::app::{self, Config};

/// Interactive text-mode drawing canvas
#[derive(Debug, Parser)]
#[command(name = "textcanvas", version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    app::init_logging();

    let args = Args::parse();

    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting textcanvas");

    let stdin = io::stdin();
    match app::repl::run(&config, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
