//! Mingle Algo - pairing and compatibility-scoring engine for the Mingle party app
//!
//! This library runs a round-based social party: participants are
//! grouped at tables across rounds, per-table conversation context is
//! generated, pairwise interaction signals are extracted from profile
//! attributes, and the accumulated signals are aggregated into a
//! weighted post-party compatibility report.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{CompatibilityScorer, PartyEngine, PartyError, TopicPool};
pub use crate::models::{
    InteractionSignal, PartyConfig, PartyResults, Profile, Report, ReportType, ScoringWeights,
};
