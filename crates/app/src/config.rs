//! Configuration for the huffc tool.
//!
//! Parses the four-mode command line: one of `-c` (compress), `-d`
//! (decompress), `-v` (encode to '0'/'1' text), `-w` (decode), followed by an
//! input and an output path.

use std::path::PathBuf;

/// Which transform to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pack the input into a dense compressed container
    Compress,
    /// Reverse a compressed container
    Decompress,
    /// Encode the input as a '0'/'1' bit-string container
    Encode,
    /// Reverse an encoded container
    Decode,
}

impl Mode {
    /// Past-tense verb for the summary line.
    pub fn verb(self) -> &'static str {
        match self {
            Mode::Compress => "compressed",
            Mode::Decompress => "decompressed",
            Mode::Encode => "encoded",
            Mode::Decode => "decoded",
        }
    }
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Selected transform
    pub mode: Mode,

    /// Input file path
    pub input_file: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Whether to print the one-line summary
    pub print_summary: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name
    /// excluded).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut files: Vec<PathBuf> = Vec::new();
        let mut print_summary = true;

        for arg in args {
            match arg.as_str() {
                "-c" => mode = Some(Mode::Compress),
                "-d" => mode = Some(Mode::Decompress),
                "-v" => mode = Some(Mode::Encode),
                "-w" => mode = Some(Mode::Decode),
                "--quiet" | "-q" => print_summary = false,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {other}"));
                }
                path => files.push(PathBuf::from(path)),
            }
        }

        let mode = mode.ok_or_else(|| "missing mode: expected one of -c, -d, -v, -w".to_string())?;

        let [input_file, output_file]: [PathBuf; 2] = files
            .try_into()
            .map_err(|files: Vec<PathBuf>| {
                format!(
                    "expected exactly two file arguments (infile outfile), got {}",
                    files.len()
                )
            })?;

        Ok(Config {
            mode,
            input_file,
            output_file,
            print_summary,
        })
    }
}

fn print_help() {
    println!("huffc: Huffman compression tool");
    println!();
    println!("USAGE:");
    println!("    huffc [-c|-d|-v|-w] [OPTIONS] <infile> <outfile>");
    println!();
    println!("MODES:");
    println!("    -c    Compress infile into a packed container");
    println!("    -d    Decompress a packed container");
    println!("    -v    Encode infile into a '0'/'1' bit-string container");
    println!("    -w    Decode a bit-string container");
    println!();
    println!("OPTIONS:");
    println!("    --quiet, -q    Don't print the summary line");
    println!("    --help, -h     Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffc -c notes.txt notes.huf      # compress");
    println!("    huffc -d notes.huf notes.txt      # restore");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn test_parse_compress() {
        let config = Config::from_args(&args(&["-c", "in.txt", "out.huf"])).unwrap();

        assert_eq!(config.mode, Mode::Compress);
        assert_eq!(config.input_file, PathBuf::from("in.txt"));
        assert_eq!(config.output_file, PathBuf::from("out.huf"));
        assert!(config.print_summary);
    }

    #[test]
    fn test_parse_all_modes() {
        for (flag, mode) in [
            ("-c", Mode::Compress),
            ("-d", Mode::Decompress),
            ("-v", Mode::Encode),
            ("-w", Mode::Decode),
        ] {
            let config = Config::from_args(&args(&[flag, "a", "b"])).unwrap();
            assert_eq!(config.mode, mode);
        }
    }

    #[test]
    fn test_quiet_flag() {
        let config = Config::from_args(&args(&["-c", "-q", "a", "b"])).unwrap();
        assert!(!config.print_summary);
    }

    #[test]
    fn test_missing_mode() {
        let result = Config::from_args(&args(&["a", "b"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_file_count() {
        assert!(Config::from_args(&args(&["-c", "only-one"])).is_err());
        assert!(Config::from_args(&args(&["-c", "a", "b", "c"])).is_err());
    }

    #[test]
    fn test_unknown_option() {
        let result = Config::from_args(&args(&["-c", "--bogus", "a", "b"]));
        assert!(result.is_err());
    }
}
