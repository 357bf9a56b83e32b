//! Parse, bind and translate for one file at a time.
//!
//! Every pass over a file gets its own arena, dropped as soon as the pass
//! is over, so no more than one file's Java tree is alive at once. The
//! declaration index and the binding registry own their data and outlive
//! the arenas.

use crate::error::DriverError;
use bumpalo::Bump;
use j2d_binder::{Binder, Environment};
use j2d_core::{LineMap, StringInterner};
use j2d_dart_ast as dart;
use j2d_diagnostics::DiagnosticCollection;
use j2d_parser::parse_compilation_unit;
use j2d_translator::{translate_unit, BindingRegistry};

/// Index the declarations of every file. Syntax errors surface here, before
/// any file is translated.
pub(crate) fn index_sources<'s>(
    sources: impl Iterator<Item = (&'s str, &'s str)>,
    interner: &StringInterner,
) -> Result<Environment, DriverError> {
    let mut env = Environment::new();
    for (path, text) in sources {
        let arena = Bump::new();
        let parsed = parse_compilation_unit(&arena, interner, path, text);
        check_diagnostics(path, text, parsed.diagnostics)?;
        env.index_unit(&parsed.unit, interner);
        check_diagnostics(path, text, env.take_diagnostics())?;
    }
    tracing::debug!(types = env.len(), "indexed declarations");
    Ok(env)
}

pub(crate) fn translate_source(
    path: &str,
    text: &str,
    env: &Environment,
    interner: &StringInterner,
    registry: &mut BindingRegistry,
) -> Result<dart::CompilationUnit, DriverError> {
    let _span = tracing::info_span!("translate_unit", path).entered();
    let arena = Bump::new();
    let parsed = parse_compilation_unit(&arena, interner, path, text);
    check_diagnostics(path, text, parsed.diagnostics)?;

    let mut binder = Binder::new(env, interner);
    binder.bind_compilation_unit(&parsed.unit);
    check_diagnostics(path, text, binder.take_diagnostics())?;
    let bindings = binder.into_bindings();
    tracing::debug!(bound = bindings.len(), "bound names");

    translate_unit(&parsed.unit, interner, &bindings, registry).map_err(|error| DriverError::Translate {
        path: path.to_string(),
        position: LineMap::new(text).position_of(error.range().pos),
        error,
    })
}

/// Fails on error diagnostics; anything milder is only logged.
fn check_diagnostics(path: &str, text: &str, mut diagnostics: DiagnosticCollection) -> Result<(), DriverError> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    diagnostics.locate_all(&LineMap::new(text));
    diagnostics.sort();
    if diagnostics.has_errors() {
        let errors = diagnostics.into_diagnostics().into_iter().filter(|d| d.is_error()).collect();
        return Err(DriverError::Parse { path: path.to_string(), diagnostics: errors });
    }
    for diagnostic in diagnostics.diagnostics() {
        match diagnostic.category {
            j2d_diagnostics::DiagnosticCategory::Warning => tracing::warn!("{}", diagnostic),
            _ => tracing::debug!("{}", diagnostic),
        }
    }
    Ok(())
}
