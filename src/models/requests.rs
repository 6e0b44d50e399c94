use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{CandidateStack, RepositoryLanguages};

/// Longest skill label accepted from clients
pub const MAX_SKILL_LEN: usize = 100;

/// Request to score one candidate stack against one required stack
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatibilityRequest {
    #[validate(length(max = 500), custom(function = "validate_skill_labels"))]
    #[serde(alias = "candidate_skills", rename = "candidateSkills")]
    pub candidate_skills: Vec<String>,
    #[validate(length(max = 500), custom(function = "validate_skill_labels"))]
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
}

/// Request to rank many candidates against one required stack
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(max = 500), custom(function = "validate_skill_labels"))]
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[validate(length(min = 1, max = 1000), nested)]
    pub candidates: Vec<CandidateStack>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[validate(range(max = 100))]
    #[serde(default, alias = "min_score", rename = "minScore")]
    pub min_score: Option<u8>,
}

/// Request to derive a skill stack from repository languages
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StackRequest {
    #[validate(length(max = 1000))]
    pub repositories: Vec<RepositoryLanguages>,
    #[serde(default, alias = "min_repositories", rename = "minRepositories")]
    pub min_repositories: Option<u16>,
}

pub(crate) fn validate_skill_labels(labels: &[String]) -> Result<(), ValidationError> {
    if labels.iter().any(|l| l.is_empty() || l.chars().count() > MAX_SKILL_LEN) {
        let mut err = ValidationError::new("skill_label");
        err.message = Some(format!("skill labels must be 1-{} characters", MAX_SKILL_LEN).into());
        return Err(err);
    }
    Ok(())
}
