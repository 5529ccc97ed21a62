//! CLI module for triplex
//!
//! Provides command-line interface for:
//! - dict: print the term dictionary
//! - query: prefix search by terms
//! - match: pattern match with variables
//! - tree: level-by-level index dump

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{dict, load, load_from_config, match_pattern, query, run, run_command, tree};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_lines, write_response};
