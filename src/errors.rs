//! Unified application error type.
//! All modules (cli, config, export, utils) return AppError to keep the error
//! handling consistent. Validation problems found while calculating a week are
//! NOT AppErrors: they travel inside the CalculationResult (see DayIssue).

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
    // Input errors
    // ---------------------------
    #[error("Invalid entry for {day}: '{entry}' (expected START,END,LUNCH)")]
    InvalidDayEntry { day: String, entry: String },

    #[error("Week has {0} validation error(s)")]
    Validation(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
