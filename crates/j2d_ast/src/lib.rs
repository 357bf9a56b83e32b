//! j2d_ast: the Java syntax tree consumed by the translator.
//!
//! Defines [`SyntaxKind`], the arena-allocated node types, modifier flags and
//! the [`ResolvedNames`] seam through which binding keys reach the core.

pub mod generated;
pub mod node;
pub mod resolve;
pub mod syntax_kind;
pub mod types;

pub use node::*;
pub use resolve::{NoBindings, ResolvedNames};
pub use syntax_kind::SyntaxKind;
pub use types::*;
