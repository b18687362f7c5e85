//! huffc: four-mode Huffman compression tool.
//!
//! Reads the whole input file, runs the selected transform through the sealed
//! container format, and writes the result. Errors go to stderr with a
//! nonzero exit.

mod config;

use config::{Config, Mode};
use huffc_core::container;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try 'huffc --help' for usage");
            process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        process::exit(1);
    }
}

fn run(config: &Config) -> huffc_core::Result<()> {
    let input = fs::read(&config.input_file)?;

    let output = match config.mode {
        Mode::Compress => container::seal_compressed(&input)?,
        Mode::Decompress => container::open_compressed(&input)?,
        Mode::Encode => container::seal_encoded(&input)?,
        Mode::Decode => container::open_encoded(&input)?,
    };

    fs::write(&config.output_file, &output)?;

    if config.print_summary {
        let ratio = output.len() as f64 / input.len() as f64 * 100.0;
        println!(
            "{}: {} -> {} bytes ({:.1}% of input)",
            config.mode.verb(),
            input.len(),
            output.len(),
            ratio
        );
    }

    Ok(())
}
