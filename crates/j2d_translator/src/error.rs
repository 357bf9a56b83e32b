//! Translation errors. Both kinds are fatal to the batch.

use j2d_ast::SyntaxKind;
use j2d_core::text::TextRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// No rule exists for the node, or a rule met a token outside its table.
    #[error("unsupported construct {kind:?}: {detail}")]
    UnsupportedConstruct {
        kind: SyntaxKind,
        detail: String,
        range: TextRange,
    },
    /// The input tree breaks a structural invariant.
    #[error("malformed input at {kind:?}: {detail}")]
    MalformedInput {
        kind: SyntaxKind,
        detail: String,
        range: TextRange,
    },
}

impl TranslateError {
    pub fn unsupported(kind: SyntaxKind, range: TextRange, detail: impl Into<String>) -> Self {
        TranslateError::UnsupportedConstruct { kind, detail: detail.into(), range }
    }

    pub fn malformed(kind: SyntaxKind, range: TextRange, detail: impl Into<String>) -> Self {
        TranslateError::MalformedInput { kind, detail: detail.into(), range }
    }

    pub fn kind(&self) -> SyntaxKind {
        match self {
            TranslateError::UnsupportedConstruct { kind, .. } | TranslateError::MalformedInput { kind, .. } => *kind,
        }
    }

    pub fn range(&self) -> TextRange {
        match self {
            TranslateError::UnsupportedConstruct { range, .. } | TranslateError::MalformedInput { range, .. } => *range,
        }
    }
}

pub type TranslateResult<T> = Result<T, TranslateError>;
