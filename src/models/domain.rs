use serde::{Deserialize, Serialize};
use validator::Validate;

/// Outcome of comparing a candidate skill set with a required skill set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of required skills satisfied, 0-100
    pub score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// A candidate to rank, e.g. a developer's detected stack
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateStack {
    #[validate(length(min = 1, max = 200))]
    pub id: String,
    #[validate(
        length(max = 500),
        custom(function = "crate::models::requests::validate_skill_labels")
    )]
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Ranked candidate in a rank response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Language data for one repository, as reported by the repository host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryLanguages {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// One skill in a derived stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    pub skill: String,
    /// Number of repositories the skill appeared in
    pub repositories: usize,
}

impl StackEntry {
    /// Plain skill labels, in stack order
    pub fn labels(entries: &[StackEntry]) -> Vec<String> {
        entries.iter().map(|e| e.skill.clone()).collect()
    }
}
