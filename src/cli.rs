use clap::Parser;

/// The flag that ships with the exercise.
pub const DEFAULT_HEX: &str = "63727970746f7b596f755f77696c6c5f62655f776f726b696e675f776974685f6865785f737472696e67735f615f6c6f747d";

#[derive(Parser, Debug)]
#[command(version, about = "Decode a hex string and print it as text", long_about = None)]
pub struct Cli {
    /// Hex digits to decode, two per byte. Defaults to the bundled flag.
    #[arg(value_name = "HEX", default_value = DEFAULT_HEX)]
    pub hex: String,

    /// Log decoding steps to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
