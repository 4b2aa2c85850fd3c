//! Error types for Retrodock operations.
//!
//! This module defines [`RetrodockError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RetrodockError` for domain-specific errors that need distinct
//!   handling (missing units, malformed headers, inapplicable operations)
//! - Use `anyhow::Error` (via `RetrodockError::Other`) for unexpected errors
//! - Inside the source-fallback loop, per-source failures of any kind are
//!   logged and swallowed; only total exhaustion surfaces [`NotFound`]
//!
//! [`NotFound`]: RetrodockError::NotFound

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Retrodock operations.
#[derive(Debug, Error)]
pub enum RetrodockError {
    /// Target or source absent.
    #[error("{what} not found")]
    NotFound { what: String },

    /// Unit present, but its `header.yml` is missing.
    #[error("{id} header not found")]
    HeaderNotFound { id: String },

    /// Header present but malformed or missing required `type`/`id`.
    #[error("Invalid header: {message}")]
    InvalidHeader { message: String },

    /// Pack is inapplicable to the unit's storage kind.
    #[error("Can't pack {}: {reason}", path.display())]
    CantPack { path: PathBuf, reason: String },

    /// Unpack is inapplicable to the unit's storage kind.
    #[error("Can't unpack {}: {reason}", path.display())]
    CantUnpack { path: PathBuf, reason: String },

    /// Malformed caller input (e.g. a non-archive URL).
    #[error("Invalid argument {arg}: {reason}")]
    UnexpectedArgument { arg: String, reason: String },

    /// Header `type` does not match the expected unit role.
    #[error("{id} is not a {expected}")]
    NotAUnit { id: String, expected: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RetrodockError {
    /// Shorthand for a [`RetrodockError::NotFound`] from anything printable.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}

/// Result type alias for Retrodock operations.
pub type Result<T> = std::result::Result<T, RetrodockError>;
