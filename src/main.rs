mod cli;
mod decode;
mod display;
mod logging;

use std::process;
use clap::Parser;
use tracing::debug;
use cli::Cli;
use decode::{hex_decode, DecodeError};

fn run(hex: &str) -> Result<String, DecodeError> {
    debug!(digits = hex.chars().count(), "decoding hex string");

    let bytes = hex_decode(hex).map_err(|e| {
        debug!(error = %e, "decoding failed");
        e
    })?;

    debug!(bytes = bytes.len(), "decoded");
    Ok(display::flag_line(&bytes))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli.hex) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
