use std::collections::HashMap;

use crate::core::normalize::{dedup_skills, fold_skill};
use crate::models::{RepositoryLanguages, StackEntry};

/// Derive a developer's technology stack from their repositories
///
/// Each repository contributes its primary language and its topics, counted
/// once per repository regardless of casing. Labels seen in fewer than
/// `min_repositories` repositories are dropped. The result is ordered by
/// repository count (descending), ties broken by first appearance.
pub fn derive_stack(repositories: &[RepositoryLanguages], min_repositories: usize) -> Vec<StackEntry> {
    let threshold = min_repositories.max(1);

    // folded label -> position in `entries`
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<StackEntry> = Vec::new();

    for repo in repositories {
        let labels: Vec<&str> = repo
            .language
            .iter()
            .chain(repo.topics.iter())
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
            .collect();

        for label in dedup_skills(&labels) {
            let key = fold_skill(&label);
            match positions.get(&key).copied() {
                Some(pos) => entries[pos].repositories += 1,
                None => {
                    positions.insert(key, entries.len());
                    entries.push(StackEntry {
                        skill: label,
                        repositories: 1,
                    });
                }
            }
        }
    }

    entries.retain(|entry| entry.repositories >= threshold);
    // stable sort keeps first-seen order among equal counts
    entries.sort_by(|a, b| b.repositories.cmp(&a.repositories));
    entries
}
