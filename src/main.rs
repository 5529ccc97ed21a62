//! triplex CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints errors not already
//! answered on stdout to stderr and exits non-zero on failure. All logic
//! lives in `cli`.

use triplex::cli;

fn main() {
    if let Err(e) = cli::run() {
        if !e.is_reported() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
