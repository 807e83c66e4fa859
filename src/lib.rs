//! Roomie Match - compatibility scoring and match detection for the Roomie roommate finder
//!
//! This library scores how well two roommate profiles fit together and turns
//! mutual likes into matches annotated with that score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_compatibility, CompatibilityEngine, Matcher, SwipeOutcome};
pub use crate::models::{BudgetRange, CompatibilityBreakdown, CompatibilityWeights, Lifestyle, Profile};
