//! Error taxonomy for the application core.
//!
//! Every failure a use case can signal falls into one of four recoverable
//! kinds (validation, not-found, permission, conflict) plus an unrecovered
//! repository passthrough. Callers at the transport boundary map
//! [`ErrorKind`] to their wire format (typically 4xx for the first four and
//! 5xx for `Repository`); the core only signals the kind.

use thiserror::Error;

pub use crate::domain::error::DomainError;

/// A referenced resource does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("memo not found")]
    Memo,

    #[error("ticker not found")]
    Ticker,

    #[error("not found in watchlist")]
    WatchlistEntry,
}

/// The caller is not allowed to perform the operation.
///
/// Existence checks always run first: a missing resource is reported as
/// [`NotFoundError`], never as a permission failure on a resource that does
/// not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("no permission to view this memo")]
    ViewMemo,

    #[error("no permission to edit this memo")]
    EditMemo,

    #[error("no permission to delete this memo")]
    DeleteMemo,

    #[error("no permission to remove this watchlist entry")]
    RemoveWatchlistEntry,
}

/// The operation collides with existing state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("already watching {code}")]
    AlreadyWatching { code: String },
}

/// Coarse classification of an [`Error`], for mapping at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Permission,
    Conflict,
    Repository,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// I/O-level failure surfacing from a repository implementation.
    ///
    /// The core never swallows these; they propagate to the caller as-is.
    #[error("repository error: {0}")]
    Repository(#[source] anyhow::Error),
}

impl Error {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Permission(_) => ErrorKind::Permission,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Repository(_) => ErrorKind::Repository,
        }
    }

    /// Wrap a storage-adapter failure for passthrough.
    pub fn repository(err: impl Into<anyhow::Error>) -> Self {
        Error::Repository(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
