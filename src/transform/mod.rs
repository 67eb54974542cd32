//! Transformation module.
//!
//! This module turns parsed catalog lines into the generated script:
//! - Classify: category assignment heuristic
//! - Pipeline: Load -> Parse -> Render -> Write orchestration

pub mod classify;
pub mod pipeline;

pub use classify::{classify, rules_description, DEFAULT_CATEGORY, NO_DEPARTMENT};
pub use pipeline::*;
