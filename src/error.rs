//! Error types for installer operations.
//!
//! This module defines [`KitError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected failures (a declined prompt, a failed install command) are
//!   reported as `Ok(false)` and never as `Err`
//! - `KitError` values travel through `Err` only for unexpected conditions
//!   such as a broken terminal or a closed stdin
//! - [`KitError::UnknownTool`] and [`KitError::UnknownDependency`] render the
//!   user-facing line for unknown names before the caller returns `false`

use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum KitError {
    /// Tool name not present in the registry.
    #[error("Unsupported tool: {name}")]
    UnknownTool { name: String },

    /// Dependency name without a known installation strategy.
    #[error("Automatic installation is not supported for dependency: {name}")]
    UnknownDependency { name: String },

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed while waiting for an answer to '{key}'")]
    PromptClosed { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, KitError>;
