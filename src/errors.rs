//! Unified application error type.
//! All modules (models, core, sheet, csvio, cli) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Invalid month: {0} (expected YYYY/MM)")]
    InvalidMonth(String),

    #[error("Invalid cell address: {0}")]
    AddressFormat(String),

    // ---------------------------
    // Record validation
    // ---------------------------
    #[error("Invalid work record: {0}")]
    Validation(String),

    #[error("Missing required field: {0}")]
    RequiredField(String),

    // ---------------------------
    // Document errors
    // ---------------------------
    #[error("Template file not found: {0}")]
    TemplateMissing(String),

    #[error("Document error: {0}")]
    Document(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / send errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Send error: {0}")]
    Send(String),
}

pub type AppResult<T> = Result<T, AppError>;
