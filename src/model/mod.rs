//! Statement model for triplex
//!
//! Two representations of the same statement:
//! - `Triple`: string terms, as produced by the triple source
//! - `EncodedTriple`: dictionary ids, as stored in the index

mod encoded;
mod triple;

pub use encoded::{EncodedTriple, TermId};
pub use triple::Triple;
