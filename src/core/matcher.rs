use crate::core::compatibility::calculate_compatibility;
use crate::models::{CandidateStack, RankedCandidate};

/// Result of ranking a batch of candidates
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedCandidate>,
    pub total_candidates: usize,
}

/// Ranks candidate stacks against a single required stack
///
/// # Pipeline Stages
/// 1. Compatibility scoring per candidate
/// 2. Minimum score cut-off
/// 3. Ordering by score (stable) and truncation
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self {
            min_score: min_score.min(100),
        }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    /// Copy of this matcher with a different cut-off
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score.min(100);
        self
    }

    /// Score and rank candidates
    ///
    /// # Arguments
    /// * `required_skills` - The target stack, e.g. a role's requirements
    /// * `candidates` - Candidate stacks to score
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// RankResult with matches ordered by score, highest first. Candidates
    /// with equal scores keep their input order.
    pub fn rank<R: AsRef<str>>(
        &self,
        required_skills: &[R],
        candidates: Vec<CandidateStack>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let result = calculate_compatibility(&candidate.skills, required_skills);

                if result.score >= self.min_score {
                    Some(RankedCandidate {
                        id: candidate.id,
                        score: result.score,
                        matched_skills: result.matched_skills,
                        missing_skills: result.missing_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(0)
    }
}
