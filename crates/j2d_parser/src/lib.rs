//! j2d_parser: recursive descent parser for the supported Java subset.
//!
//! Parses the scanner's token stream into an arena-allocated
//! [`j2d_ast::CompilationUnit`]. Syntax errors become diagnostics and the
//! parser recovers at statement and member boundaries.

mod parser;
mod precedence;
mod utilities;

pub use parser::{parse_compilation_unit, ParsedUnit, Parser};
