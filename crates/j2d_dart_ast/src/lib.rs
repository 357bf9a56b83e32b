//! j2d_dart_ast: the Dart syntax tree produced by the translator.
//!
//! Unlike the Java tree, Dart nodes are plain owned values: the translator
//! builds them bottom-up and the printer only reads them. Identifier text
//! lives outside the tree, in an [`IdentifierTable`], so that renaming a
//! symbol touches every occurrence at once without walking any tree.

pub mod identifier;
pub mod node;
pub mod token;
pub mod visitor;

pub use identifier::{IdentifierId, IdentifierTable};
pub use node::*;
pub use token::TokenType;
pub use visitor::DartVisitor;
