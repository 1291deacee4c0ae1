//! Failure taxonomy for the admin tool.
//!
//! A closed enumeration: `main` matches every variant when mapping an
//! outcome to a message and exit status. Repository operations resolve
//! their own precondition checks and return the structured variant; no
//! layer catches dynamically.

use thiserror::Error;

/// Every failure the tool can report.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The target username does not exist.
    #[error("User '{0}' not found.")]
    NotFound(String),

    /// `create` on a username that is already taken.
    #[error("User '{0}' already exists.")]
    AlreadyExists(String),

    /// Any failure surfaced by the underlying SQLite store.
    #[error(transparent)]
    Store(#[from] rusqlite::Error),

    /// Terminal I/O failure while prompting the operator.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Operator declined a destructive confirmation. A no-op, not a fault.
    #[error("Cancelled.")]
    Cancelled,
}

impl From<dialoguer::Error> for AdminError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(source) => Self::Io(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
