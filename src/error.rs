//! Error types for the Prodload pipeline.
//!
//! This module defines the error hierarchy:
//!
//! - [`LoadError`] - Input file loading and decoding errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! Per-line conditions (short lines, missing name or SKU) are not errors:
//! they are reported as [`crate::parser::SkipReason`] values in the run
//! summary and never halt a run. Only file-level conditions are fatal.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while reading and decoding the input catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Every candidate encoding reported decode errors.
    #[error(
        "Could not decode {} with any candidate encoding [{}] (chardet guess: {detected})",
        .path.display(),
        .tried.join(", ")
    )]
    DecodeExhausted {
        path: PathBuf,
        tried: Vec<&'static str>,
        detected: String,
    },

    /// Failed to read the file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::transform::pipeline::generate`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Output writing error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // LoadError -> PipelineError
        let load_err = LoadError::NotFound(PathBuf::from("producto.txt"));
        let pipeline_err: PipelineError = load_err.into();
        assert!(pipeline_err.to_string().contains("producto.txt"));
    }

    #[test]
    fn test_decode_exhausted_lists_candidates() {
        let err = LoadError::DecodeExhausted {
            path: PathBuf::from("producto.txt"),
            tried: vec!["utf-8", "iso-8859-15"],
            detected: "big5".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("utf-8, iso-8859-15"));
        assert!(msg.contains("big5"));
    }
}
