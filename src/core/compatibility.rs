use crate::core::normalize::SkillIndex;
use crate::models::MatchResult;

/// Score returned when there is nothing to satisfy
pub const VACUOUS_SCORE: u8 = 100;

/// Calculate how well a candidate skill set covers a required skill set
///
/// Every required label is checked against the candidate labels
/// case-insensitively and lands in either `matched_skills` or
/// `missing_skills`, keeping its original casing and its position relative
/// to the other required labels. Duplicate required labels are scored
/// independently.
///
/// score = round_half_up(matched / required * 100)
///
/// An empty required set scores 100 with both lists empty.
pub fn calculate_compatibility<C, R>(candidate_skills: &[C], required_skills: &[R]) -> MatchResult
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    if required_skills.is_empty() {
        return MatchResult {
            score: VACUOUS_SCORE,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        };
    }

    let index = SkillIndex::new(candidate_skills);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .map(|s| s.as_ref().to_string())
        .partition(|s| index.contains(s));

    let score = percentage(matched_skills.len(), required_skills.len());

    MatchResult {
        score,
        matched_skills,
        missing_skills,
    }
}

/// Integer percentage of `part` in `whole`, rounded half up
///
/// Done in integer arithmetic so exact halves (1/8 -> 12.5) always round up.
/// Widened to u128 so no list length can overflow the intermediate products.
#[inline]
fn percentage(part: usize, whole: usize) -> u8 {
    debug_assert!(whole > 0 && part <= whole);
    let (part, whole) = (part as u128, whole as u128);
    let rounded = (part * 200 + whole) / (whole * 2);
    rounded.min(100) as u8
}
