//! Error types shared by the ledger workspace.
//!
//! Ledger queries are total. Only the append boundary, configuration loading
//! and output rendering can fail; each returns `LedgerResult<T>`.

use thiserror::Error;

/// The unified error type for the campus ledger crates.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A category string outside the appendable set {leave, event, resource}.
    #[error("invalid category '{value}': expected one of leave, event, resource")]
    InvalidCategory { value: String },

    /// An append was rejected before anything was hashed or stored.
    #[error("validation error: {reason}")]
    Validation { reason: String },

    /// Records could not be rendered for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;
