//! Errors surfaced by the session runtime.

use arena_core::{ArenaError, CatalogError, CoreError, ErrorSeverity};
use thiserror::Error;

use crate::store::SessionId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    #[error("no {kind} available in the catalog")]
    EmptyCatalog { kind: &'static str },
}

impl CoreError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Arena(err) => err.severity(),
            Self::Catalog(err) => err.severity(),
            Self::SessionNotFound(_) => ErrorSeverity::Recoverable,
            Self::EmptyCatalog { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Arena(err) => err.error_code(),
            Self::Catalog(err) => err.error_code(),
            Self::SessionNotFound(_) => "RUNTIME_SESSION_NOT_FOUND",
            Self::EmptyCatalog { .. } => "RUNTIME_EMPTY_CATALOG",
        }
    }
}
