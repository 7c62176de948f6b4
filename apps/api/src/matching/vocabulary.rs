//! Master lists of known skills, interests, strengths and weaknesses, derived
//! from the reference dataset so clients can offer autocomplete.

use std::collections::{BTreeSet, HashMap};

use crate::matching::dataset::ReferenceDataset;
use crate::profile::models::ListAttribute;

pub const LIST_LIMIT: usize = 500;
pub const SEARCH_LIMIT: usize = 50;

/// Attributes exposed as master lists.
pub const VOCABULARY_ATTRIBUTES: [ListAttribute; 4] = [
    ListAttribute::Skills,
    ListAttribute::Interests,
    ListAttribute::Strengths,
    ListAttribute::Weaknesses,
];

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    names: HashMap<ListAttribute, Vec<String>>,
}

impl Vocabulary {
    pub fn from_dataset(dataset: &ReferenceDataset) -> Self {
        let names = VOCABULARY_ATTRIBUTES
            .into_iter()
            .map(|attr| {
                let distinct: BTreeSet<&str> = dataset
                    .rows()
                    .iter()
                    .flat_map(|row| row.attributes.list(attr))
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                (attr, distinct.into_iter().map(str::to_string).collect())
            })
            .collect();
        Self { names }
    }

    /// Resolves a path segment such as `skills` to a vocabulary attribute.
    pub fn attribute(name: &str) -> Option<ListAttribute> {
        ListAttribute::from_key(name).filter(|a| VOCABULARY_ATTRIBUTES.contains(a))
    }

    /// Ascending names, capped at `LIST_LIMIT`.
    pub fn all(&self, attr: ListAttribute) -> Vec<String> {
        self.names
            .get(&attr)
            .map(|names| names.iter().take(LIST_LIMIT).cloned().collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring search, capped at `SEARCH_LIMIT`.
    pub fn search(&self, attr: ListAttribute, query: &str) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.names
            .get(&attr)
            .map(|names| {
                names
                    .iter()
                    .filter(|n| n.to_lowercase().contains(&needle))
                    .take(SEARCH_LIMIT)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::dataset::ReferenceRow;
    use crate::profile::models::NormalizedProfile;

    fn dataset() -> ReferenceDataset {
        let rows = vec![
            ReferenceRow {
                career: "A".into(),
                attributes: NormalizedProfile {
                    skills: vec!["Python".into(), " SQL ".into(), "".into()],
                    weaknesses: vec!["Impatience".into()],
                    ..Default::default()
                },
            },
            ReferenceRow {
                career: "B".into(),
                attributes: NormalizedProfile {
                    skills: vec!["SQL".into(), "PySpark".into(), "Go".into()],
                    ..Default::default()
                },
            },
        ];
        ReferenceDataset::new(rows)
    }

    #[test]
    fn test_all_is_sorted_and_distinct() {
        let vocab = Vocabulary::from_dataset(&dataset());
        assert_eq!(
            vocab.all(ListAttribute::Skills),
            vec!["Go", "PySpark", "Python", "SQL"]
        );
        assert_eq!(vocab.all(ListAttribute::Weaknesses), vec!["Impatience"]);
        assert!(vocab.all(ListAttribute::Interests).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let vocab = Vocabulary::from_dataset(&dataset());
        assert_eq!(vocab.search(ListAttribute::Skills, "py"), vec!["PySpark", "Python"]);
        assert_eq!(vocab.search(ListAttribute::Skills, "").len(), 4);
    }

    #[test]
    fn test_attribute_resolution() {
        assert_eq!(Vocabulary::attribute("strengths"), Some(ListAttribute::Strengths));
        assert_eq!(Vocabulary::attribute("learning_formats"), None);
        assert_eq!(Vocabulary::attribute("nope"), None);
    }
}
