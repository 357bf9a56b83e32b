use j2d_core::LineAndColumn;
use j2d_diagnostics::Diagnostic;
use j2d_module::ModuleError;
use j2d_translator::{RegistryError, TranslateError};
use thiserror::Error;

/// Fatal batch errors. The first one aborts the batch.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Front-end error diagnostics for one file, located and sorted.
    #[error("{}", describe_diagnostics(diagnostics))]
    Parse { path: String, diagnostics: Vec<Diagnostic> },
    /// `error` is part of the message and is not exposed as a source.
    #[error("{path}:{position}: {error}")]
    Translate { path: String, position: LineAndColumn, error: TranslateError },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Module(#[from] ModuleError),
}

fn describe_diagnostics(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "syntax errors".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl DriverError {
    /// The translation error behind this failure, if any.
    pub fn translate_error(&self) -> Option<&TranslateError> {
        match self {
            DriverError::Translate { error, .. } => Some(error),
            _ => None,
        }
    }
}
