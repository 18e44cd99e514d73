//! Command-line argument definitions for the Lineage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Lineage family tree tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Lineage file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// What to render
    #[arg(short, long, value_enum, default_value_t = Format::Timeline)]
    pub format: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Graphviz DOT diagram of the family
    Tree,
    /// Graphviz DOT diagram of the parsed statements
    Structure,
    /// Chronological list of births, weddings and deaths
    Timeline,
    /// Persons grouped by generation
    Generations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lineage", "family.ftree"]).unwrap();

        assert_eq!(args.input, "family.ftree");
        assert!(args.output.is_none());
        assert_eq!(args.format, Format::Timeline);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_flag() {
        let args =
            Args::try_parse_from(["lineage", "family.ftree", "-f", "tree", "-o", "out.dot"])
                .unwrap();

        assert_eq!(args.format, Format::Tree);
        assert_eq!(args.output.as_deref(), Some("out.dot"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["lineage", "family.ftree", "-f", "svg"]).is_err());
    }
}
