//! j2d_scanner: tokenizer for Java source text.
//!
//! Produces one token at a time for the parser. Comments and whitespace are
//! skipped; literal tokens keep their exact spelling (suffixes, quotes and
//! escapes included) so later stages can normalize them.

mod char_codes;
mod scanner;
mod token;

pub use scanner::{Scanner, ScannerState};
pub use token::{TokenFlags, TokenInfo};
