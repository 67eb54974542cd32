//! # Prodload - product catalog to SQL import script
//!
//! Prodload converts the point-of-sale catalog export (`producto.txt`) into a
//! bulk `INSERT` script for the `productos` table, with embedded state-check
//! and post-import verification queries.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ producto.txt │────▶│   Loader    │────▶│ Parse+Build  │────▶│  SQL script │
//! │ (TSV export) │     │ (enc chain) │     │  (records)   │     │ (verify qs) │
//! └──────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prodload::{generate, GenerateOptions};
//!
//! fn main() {
//!     let summary = generate(&GenerateOptions::default()).unwrap();
//!     println!("Wrote {} records", summary.record_count);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Domain model ([`ProductRecord`])
//! - [`loader`] - Input loading with encoding fallback
//! - [`parser`] - Tab-delimited line parsing and numeric coercion
//! - [`transform`] - Classification heuristic and pipeline
//! - [`render`] - SQL escaping, tuples, and script template

// Core modules
pub mod error;
pub mod models;

// Input
pub mod loader;
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod render;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{LoadError, LoadResult, PipelineError, PipelineResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ProductRecord, UNIT};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use loader::{detect_charset, load_file, LoadedFile, CANDIDATE_ENCODINGS};

// =============================================================================
// Re-exports - Parser
// =============================================================================

pub use parser::{parse_count, parse_line, parse_price, LineOutcome, ParsedLine, SkipReason, MIN_FIELDS};

// =============================================================================
// Re-exports - Classifier
// =============================================================================

pub use transform::classify::{classify, rules_description, DEFAULT_CATEGORY, NO_DEPARTMENT};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    generate, parse_catalog, GenerateOptions, ParsedCatalog, RunSummary, SkippedLine,
    DEFAULT_INPUT, DEFAULT_OUTPUT, SAMPLE_ROWS,
};

// =============================================================================
// Re-exports - Renderer
// =============================================================================

pub use render::{escape_str, render_tuple, SqlTemplate};
