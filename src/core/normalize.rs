use std::collections::HashSet;

/// Fold a skill label to the form used for equality comparison.
///
/// This is a plain Unicode lowercase mapping, not full case folding:
/// `"TypeScript"` and `"typescript"` compare equal, `"ß"` and `"SS"` do not.
/// Whitespace is significant.
#[inline]
pub fn fold_skill(label: &str) -> String {
    label.to_lowercase()
}

/// Case-folded membership set over a list of skill labels
#[derive(Debug, Clone, Default)]
pub struct SkillIndex {
    folded: HashSet<String>,
}

impl SkillIndex {
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Self {
        Self {
            folded: skills.iter().map(|s| fold_skill(s.as_ref())).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.folded.contains(&fold_skill(label))
    }

    /// Number of distinct labels after folding
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Drop case-insensitive duplicates, keeping the first occurrence and its casing
pub fn dedup_skills<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(labels.len());
    labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| seen.insert(fold_skill(label)))
        .map(str::to_string)
        .collect()
}
