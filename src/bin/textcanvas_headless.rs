//! Textcanvas Headless Runner
//!
//! Runs a script of drawing commands without a prompt and prints the
//! final canvas. Useful for testing and generating deterministic snapshots.
//!
//! # Usage
//!
//! ```bash
//! # Run commands from stdin and print the canvas
//! printf 'C 20 4\nR 14 1 18 3\n' | textcanvas-headless
//!
//! # Run a script file and print a JSON snapshot
//! textcanvas-headless --json drawing.txt > drawing.json
//!
//! # Fail unless the script still produces the saved snapshot
//! textcanvas-headless --expect drawing.json drawing.txt
//! ```

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use textcanvas::app::{self, run_script, Config};

/// Headless runner for textcanvas command scripts
#[derive(Debug, Parser)]
#[command(name = "textcanvas-headless", version, about)]
struct Args {
    /// Script file (stdin if not specified)
    input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output the final snapshot as JSON
    #[arg(short, long)]
    json: bool,

    /// Abort at the first line that fails
    #[arg(short, long)]
    strict: bool,

    /// Compare the final canvas with a JSON snapshot
    #[arg(short, long, value_name = "PATH")]
    expect: Option<PathBuf>,
}

fn main() -> ExitCode {
    app::init_logging();

    let args = Args::parse();

    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Read input
    let source = match &args.input {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut data = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        }
    };

    let report = match run_script(&config, &source, args.strict) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    for e in &report.errors {
        eprintln!("{}", e);
    }

    if let Some(path) = &args.expect {
        let expected = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading snapshot '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        };
        match report.matches_snapshot(&expected) {
            Ok(true) => {}
            Ok(false) => {
                eprintln!("Canvas does not match snapshot '{}'", path.display());
                return ExitCode::FAILURE;
            }
            Err(e) => {
                eprintln!("Error parsing snapshot '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(snapshot) = report.engine.snapshot() else {
        eprintln!("No canvas was created");
        return ExitCode::FAILURE;
    };

    // Output result
    if args.json {
        match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", snapshot.to_text());
    }

    ExitCode::SUCCESS
}
