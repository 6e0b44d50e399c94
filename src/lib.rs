//! DevShowcase Match - skill compatibility scoring service
//!
//! This library provides the compatibility scorer used by DevShowcase to
//! compare a developer's technology stack with a target stack, plus the
//! ranking, stack derivation and HTTP layers built around it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_compatibility, derive_stack, Matcher, RankResult};
pub use models::{CandidateStack, MatchResult, RankedCandidate, RepositoryLanguages, StackEntry};
