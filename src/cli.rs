/// CLI argument definitions for the `locmap` command.
///
/// Defines all subcommands and their arguments using the `clap` derive
/// macros.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use locmap::map::Dialect;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "locmap", version, about = "Character-level code maps and LOC for C and Java")]
pub struct Cli {
    /// Config file (default: ./.locmap.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count lines of code, blank, comment and commented-out lines per file
    Loc {
        /// Files or directories to measure (default: current directory)
        paths: Vec<PathBuf>,

        /// First line to measure (1-based)
        #[arg(long, default_value = "1")]
        begin: usize,

        /// Stop before this line (default: end of file)
        #[arg(long)]
        end: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Print each file with LOC numbers in the margin
        #[arg(long)]
        listing: bool,

        /// Include test files and directories (excluded by default)
        #[arg(long)]
        include_tests: bool,

        /// Only files whose path matches this glob, e.g. "**/*.java"
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Print the per-character code map of one file
    #[command(long_about = "\
Print the per-character code map of one file.

Each source line is followed by one symbol per character:
  0 blank             1 code
  2 line comment      5 line comment holding code
  3 block comment     6 block comment holding code
  4 doc comment (Java only)")]
    Map {
        /// Source file to map
        file: PathBuf,

        /// Dialect to use instead of detecting it from the extension (c, java)
        #[arg(long)]
        dialect: Option<Dialect>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported source files
    Find {
        /// Directory to search (default: current directory)
        root: Option<PathBuf>,

        /// Only files whose path matches this glob
        #[arg(long)]
        pattern: Option<String>,

        /// Include test files and directories (excluded by default)
        #[arg(long)]
        include_tests: bool,
    },

    /// Generate a shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
