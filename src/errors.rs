//! Unified application error type.
//! Engine, CLI and export code all return AppError so that every outcome
//! reaches the caller as a value instead of a panic.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    /// A single statement failed (malformed input, store I/O error, ...).
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Cannot open database '{path}': {reason}")]
    Connection { path: String, reason: String },

    #[error("Schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("{0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
