//! j2d_translator: Java syntax trees to Dart syntax trees.
//!
//! The translator walks a parsed and bound Java compilation unit and builds
//! the equivalent Dart tree, one mapping rule per Java construct:
//!
//! - operators go through closed tables ([`operators`]); both right shifts
//!   become `>>`
//! - number literals lose their `L`/`F`/`D` suffix and floating literals gain
//!   a `.0` when needed ([`normalize_number`])
//! - `byte`, `char`, `short` and `long` become `int`, `float` becomes
//!   `double` and `boolean` becomes `bool`
//! - casts vanish, `synchronized` keeps only its block, and nested labels
//!   collapse onto one statement
//!
//! Every identifier produced for a resolved Java name is recorded in the
//! batch's [`BindingRegistry`], so that one symbol can be renamed in every
//! translated file after the whole batch is done.
//!
//! Anything without a rule fails with [`TranslateError`]. There is no
//! fallback rendering.

mod dispatch;
mod error;
pub mod literals;
pub mod operators;
mod registry;
mod rules;
mod translator;

pub use dispatch::{DartNode, JavaNode};
pub use error::{TranslateError, TranslateResult};
pub use literals::{normalize_number, primitive_type_name, NumberLiteral};
pub use registry::{BindingRegistry, KeyCollision, KeyPolicy, RegistryError};
pub use translator::{translate_unit, Translator};
