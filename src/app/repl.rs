//! Interactive read-validate-execute-render loop

use std::io::{self, BufRead, Write};

use tracing::info;

use super::config::Config;
use crate::core::Command;

/// Run the interactive session until `Q` or end of input
///
/// Each accepted command is followed by the full rendered canvas.
/// Rejected input is reported and the loop carries on.
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, mut output: W) -> io::Result<()> {
    let parser = config.parser();
    let mut engine = config.engine();
    let mut line = String::new();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            writeln!(output)?;
            return Ok(());
        }
        let text = line.trim_end_matches(['\r', '\n']);

        match parser.parse_line(text) {
            Command::Invalid(raw) => writeln!(output, "Invalid command: {}", raw)?,
            Command::Quit => {
                writeln!(output, "Application quit.")?;
                return Ok(());
            }
            command => match engine.execute(&command) {
                Ok(_) => {
                    for row in engine.render().unwrap_or_default() {
                        writeln!(output, "{}", row)?;
                    }
                }
                Err(e) => writeln!(output, "Invalid Parameter: {}", e)?,
            },
        }
    }
}
