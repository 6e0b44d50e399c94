// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateStack, MatchResult, RankedCandidate, RepositoryLanguages, StackEntry};
pub use requests::{CompatibilityRequest, RankRequest, StackRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, StackResponse};
