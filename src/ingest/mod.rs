//! Triple source for triplex
//!
//! Reads already-parsed statements once, at build time.

mod errors;
mod reader;

pub use errors::{IngestError, IngestResult};
pub use reader::{load_file, parse_line, read_triples};
