//! j2d_binder: symbol resolution for the Java front-end.
//!
//! The [`Environment`] indexes the declarations of every file in a batch.
//! The [`Binder`] then walks one compilation unit at a time and attaches a
//! stable binding key to each identifier it can resolve. Keys follow the
//! JDT conventions (`Lpkg/Type;`, `Lpkg/Type;.m(I)V`, `Lpkg/Type;.f)I`) so
//! that the same entity gets the same key in every file.

mod binder;
mod descriptor;
mod environment;
mod scope;

pub use binder::{Binder, Bindings};
pub use descriptor::{number_literal_kind, primitive_descriptor, type_key, ResolvedType};
pub use environment::{
    Environment, FieldInfo, ImportInfo, MethodInfo, TypeContext, TypeInfo, TypeRef, TypeVariable,
};
