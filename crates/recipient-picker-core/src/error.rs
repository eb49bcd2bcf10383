//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in recipient store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not look like `local@domain.tld`.
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    /// Email already exists somewhere in the store.
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// Domain has no bucket in the available pool.
    #[error("Domain is not available: {0}")]
    DomainNotAvailable(String),

    /// Email is not in the available pool.
    #[error("Email is not available: {0}")]
    EmailNotAvailable(String),

    /// Domain is not among the company selections.
    #[error("Domain is not selected: {0}")]
    DomainNotSelected(String),

    /// Email is not among the individual selections.
    #[error("Email is not selected: {0}")]
    EmailNotSelected(String),

    /// Seed file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for errors caused by what the user typed.
    ///
    /// These are the failures a rendering layer shows as transient
    /// notifications rather than as internal faults.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::DuplicateEmail(_))
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
