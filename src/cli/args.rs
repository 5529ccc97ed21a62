//! CLI argument definitions using clap
//!
//! Commands:
//! - triplex dict  --triples <path>
//! - triplex query --triples <path> <term> [<term> [<term>]]
//! - triplex match --triples <path> <s> <p> <o>
//! - triplex tree  --triples <path>

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// triplex - dictionary-encoded prefix index over RDF-style triples
#[derive(Parser, Debug)]
#[command(name = "triplex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where statements come from and how the index is shaped
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Triple file, one `<s, p, o>` per line (overrides config)
    #[arg(long)]
    pub triples: Option<PathBuf>,

    /// Branching factor t >= 2 (overrides config)
    #[arg(long)]
    pub branching_factor: Option<usize>,

    /// Minimum log severity: trace, info, warn, error, fatal (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the term dictionary
    Dict {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Prefix search by leading terms
    Query {
        #[command(flatten)]
        source: SourceArgs,

        /// Leading terms: subject [predicate [object]]
        #[arg(required = true)]
        terms: Vec<String>,
    },

    /// Match a pattern; `?name` marks a variable
    Match {
        #[command(flatten)]
        source: SourceArgs,

        /// Subject term or variable
        subject: String,
        /// Predicate term or variable
        predicate: String,
        /// Object term or variable
        object: String,
    },

    /// Print the index one level per line
    Tree {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
