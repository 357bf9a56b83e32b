//! Mapping rules, one `impl Translator` block per family of Java constructs.
//!
//! Rules are selected in [`crate::dispatch`]; they recurse through the same
//! typed entry points, never through [`Translator::translate`](crate::Translator::translate).

mod declarations;
mod expressions;
mod statements;
mod types;
