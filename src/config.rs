//! Command-line and environment configuration for the `decibinary` binary.

use clap::Parser;
use std::path::PathBuf;

/// Answer decibinary queries: reads a query count and that many 1-based
/// indices, writes the matching decibinary numbers one per line.
#[derive(Parser, Debug, Clone)]
#[command(name = "decibinary", version, about)]
pub struct Cli {
    /// File to read queries from (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write results to (defaults to stdout)
    #[arg(short, long, env = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_from_env() {
        // Kept in one test so no other test observes the variable.
        std::env::remove_var("OUTPUT_PATH");
        let cli = Cli::try_parse_from(["decibinary"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());

        std::env::set_var("OUTPUT_PATH", "/tmp/decibinary.out");
        let from_env = Cli::try_parse_from(["decibinary"]).unwrap();
        let from_flag = Cli::try_parse_from(["decibinary", "-o", "flag.out"]).unwrap();
        std::env::remove_var("OUTPUT_PATH");

        assert_eq!(from_env.output, Some(PathBuf::from("/tmp/decibinary.out")));
        assert_eq!(from_flag.output, Some(PathBuf::from("flag.out")));
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::try_parse_from(["decibinary", "-i", "queries.txt", "--output", "out.txt"])
            .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("queries.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["decibinary", "--frontier", "3"]).is_err());
    }
}
