//! Error types for exam layout operations.
//!
//! The engine itself never fails. [`ExamLayoutError`] covers what can go wrong
//! around it: reading and decoding stored versions, layouts, and response
//! sheets, and checking a stored layout against its version.

use std::io;

use thiserror::Error;

use exam_layout_core::LayoutError;

/// The main error type for exam layout operations.
#[derive(Debug, Error)]
pub enum ExamLayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),
}
