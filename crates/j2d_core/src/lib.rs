//! j2d_core: shared building blocks for the java2dart pipeline.
//!
//! Name interning, source positions and the small collection types used by
//! the front-end, the translator and the driver.

pub mod collections;
pub mod intern;
pub mod text;

pub use collections::{FxHashMap, FxHashSet, MultiMap};
pub use intern::{InternedString, StringInterner};
pub use text::{LineAndColumn, LineMap, TextRange};
