//! Profile Normalizer — maps loosely-structured client profiles onto `NormalizedProfile`.
//!
//! Clients have stored the same logical attribute under several shapes over time
//! (`strengths` at the top level or under `strengthsWeaknesses`, learning pace under
//! `learningPreferences.pace`, ...). Each attribute owns an ordered list of lookup
//! paths; the first path yielding a non-empty value wins.
//!
//! Normalization is total: nothing here can fail, absent data becomes `[]` / `None`.

use serde_json::{Map, Value};

use crate::profile::models::{ListAttribute, NormalizedProfile, ScalarAttribute};

// ────────────────────────────────────────────────────────────────────────────
// Lookup table
// ────────────────────────────────────────────────────────────────────────────

/// Where a value may live inside a raw profile.
#[derive(Debug, Clone, Copy)]
enum LookupPath {
    /// A key on the profile object itself.
    Top(&'static str),
    /// A key inside a sub-object; the sub-object is the first truthy alias in `section`.
    Nested {
        section: &'static [&'static str],
        key: &'static str,
    },
}

const STRENGTHS_WEAKNESSES: &[&str] = &["strengthsWeaknesses", "strengths_weaknesses"];
const LEARNING_PREFERENCES: &[&str] = &["learningPreferences", "learning_preferences"];
const WORK_ENVIRONMENT: &[&str] = &["workEnvironment", "work_environment"];
const PERSONALITY: &[&str] = &["personality"];
const SALARY: &[&str] = &["salary", "salaryExpectations"];

use LookupPath::{Nested, Top};

const LIST_LOOKUPS: &[(ListAttribute, &[LookupPath])] = &[
    (ListAttribute::Skills, &[Top("skills")]),
    (ListAttribute::Interests, &[Top("interests")]),
    (
        ListAttribute::Strengths,
        &[
            Top("strengths"),
            Nested { section: STRENGTHS_WEAKNESSES, key: "strengths" },
        ],
    ),
    (
        ListAttribute::Weaknesses,
        &[
            Top("weaknesses"),
            Nested { section: STRENGTHS_WEAKNESSES, key: "weaknesses" },
        ],
    ),
    (
        ListAttribute::LearningFormats,
        &[
            Top("learning_formats"),
            Nested { section: LEARNING_PREFERENCES, key: "learning_formats" },
            Nested { section: LEARNING_PREFERENCES, key: "formats" },
        ],
    ),
    (
        ListAttribute::PreferredWorkEnvironment,
        &[
            Top("preferred_work_environment"),
            Nested { section: WORK_ENVIRONMENT, key: "preferred_work_environment" },
            Nested { section: WORK_ENVIRONMENT, key: "options" },
        ],
    ),
];

const SCALAR_LOOKUPS: &[(ScalarAttribute, &[LookupPath])] = &[
    (
        ScalarAttribute::PersonalityWorkType,
        &[
            Top("personality_work_type"),
            Nested { section: PERSONALITY, key: "work_type" },
            Nested { section: PERSONALITY, key: "type" },
        ],
    ),
    (
        ScalarAttribute::PersonalityWorkStyle,
        &[
            Top("personality_work_style"),
            Nested { section: PERSONALITY, key: "work_style" },
        ],
    ),
    (
        ScalarAttribute::PersonalityEnvPref,
        &[
            Top("personality_env_pref"),
            Nested { section: PERSONALITY, key: "env_pref" },
        ],
    ),
    (
        ScalarAttribute::PersonalityStressHandling,
        &[
            Top("personality_stress_handling"),
            Nested { section: PERSONALITY, key: "stress_handling" },
        ],
    ),
    (
        ScalarAttribute::LearningPace,
        &[
            Top("learning_pace"),
            Nested { section: LEARNING_PREFERENCES, key: "learning_pace" },
            Nested { section: LEARNING_PREFERENCES, key: "pace" },
        ],
    ),
    (
        ScalarAttribute::ModePreference,
        &[
            Top("mode_preference"),
            Nested { section: LEARNING_PREFERENCES, key: "mode_preference" },
            Nested { section: LEARNING_PREFERENCES, key: "mode" },
        ],
    ),
    (
        ScalarAttribute::SalaryExpectation,
        &[
            Top("salary_expectation"),
            Nested { section: SALARY, key: "expectation" },
            Nested { section: SALARY, key: "range" },
        ],
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes an arbitrary JSON value into the fixed attribute schema.
///
/// Non-object input normalizes to the empty profile. If none of the schema keys
/// are present at the top level but a `profile` object is, that object is used.
pub fn normalize_profile(raw: &Value) -> NormalizedProfile {
    let empty = Map::new();
    let root = raw.as_object().unwrap_or(&empty);
    let profile = unwrap_profile(root);

    let mut norm = NormalizedProfile::default();

    for (attr, paths) in LIST_LOOKUPS {
        *norm.list_mut(*attr) = paths
            .iter()
            .filter_map(|path| resolve(profile, *path))
            .map(extract_any_list)
            .find(|list| !list.is_empty())
            .unwrap_or_default();
    }

    for (attr, paths) in SCALAR_LOOKUPS {
        *norm.scalar_mut(*attr) = paths
            .iter()
            .filter_map(|path| resolve(profile, *path))
            .find_map(scalar_text);
    }

    norm
}

fn unwrap_profile(root: &Map<String, Value>) -> &Map<String, Value> {
    let has_schema_key = ListAttribute::ALL
        .iter()
        .map(|a| a.key())
        .chain(ScalarAttribute::ALL.iter().map(|a| a.key()))
        .any(|key| root.contains_key(key));

    if has_schema_key {
        return root;
    }
    match root.get("profile") {
        Some(Value::Object(inner)) => inner,
        _ => root,
    }
}

fn resolve(profile: &Map<String, Value>, path: LookupPath) -> Option<&Value> {
    match path {
        LookupPath::Top(key) => profile.get(key),
        LookupPath::Nested { section, key } => section
            .iter()
            .filter_map(|alias| profile.get(*alias))
            .find(|v| is_truthy(v))
            .and_then(Value::as_object)
            .and_then(|obj| obj.get(key)),
    }
}

/// Pulls list content out of a value, one level deep:
/// a list is taken as-is, an object contributes the concatenation of its list
/// values (non-list values ignored), anything else is empty.
pub fn extract_any_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(element_text).collect(),
        Value::Object(map) => map
            .values()
            .filter_map(Value::as_array)
            .flatten()
            .filter_map(element_text)
            .collect(),
        _ => Vec::new(),
    }
}

/// String form of a list element. Nested containers and nulls are dropped.
pub fn element_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_profile_passes_through() {
        let norm = normalize_profile(&json!({
            "skills": ["Python", "SQL"],
            "interests": ["Data"],
            "learning_pace": "Fast",
            "salary_expectation": "High"
        }));
        assert_eq!(norm.skills, vec!["Python", "SQL"]);
        assert_eq!(norm.interests, vec!["Data"]);
        assert_eq!(norm.learning_pace.as_deref(), Some("Fast"));
        assert_eq!(norm.salary_expectation.as_deref(), Some("High"));
        assert!(norm.weaknesses.is_empty());
        assert!(norm.personality_work_type.is_none());
    }

    #[test]
    fn test_unwraps_nested_profile() {
        let norm = normalize_profile(&json!({
            "email": "a@b.c",
            "profile": { "skills": ["Rust"] }
        }));
        assert_eq!(norm.skills, vec!["Rust"]);
    }

    #[test]
    fn test_does_not_unwrap_when_top_level_has_attributes() {
        let norm = normalize_profile(&json!({
            "interests": ["Music"],
            "profile": { "skills": ["Rust"] }
        }));
        assert!(norm.skills.is_empty());
        assert_eq!(norm.interests, vec!["Music"]);
    }

    #[test]
    fn test_dict_of_lists_is_flattened() {
        let norm = normalize_profile(&json!({
            "skills": { "a_selected": ["Python"], "b_custom": ["Go"], "c_note": "ignored" }
        }));
        assert_eq!(norm.skills, vec!["Python", "Go"]);
    }

    #[test]
    fn test_strengths_from_combined_section() {
        let norm = normalize_profile(&json!({
            "skills": [],
            "strengthsWeaknesses": {
                "strengths": ["Leadership"],
                "weaknesses": ["Public Speaking"]
            }
        }));
        assert_eq!(norm.strengths, vec!["Leadership"]);
        assert_eq!(norm.weaknesses, vec!["Public Speaking"]);
    }

    #[test]
    fn test_top_level_wins_over_section() {
        let norm = normalize_profile(&json!({
            "strengths": ["Creativity"],
            "strengths_weaknesses": { "strengths": ["Leadership"] }
        }));
        assert_eq!(norm.strengths, vec!["Creativity"]);
    }

    #[test]
    fn test_empty_top_level_falls_through_to_section() {
        let norm = normalize_profile(&json!({
            "learning_formats": [],
            "learningPreferences": { "formats": ["Video"], "pace": "slow", "mode": "Online" }
        }));
        assert_eq!(norm.learning_formats, vec!["Video"]);
        assert_eq!(norm.learning_pace.as_deref(), Some("slow"));
        assert_eq!(norm.mode_preference.as_deref(), Some("Online"));
    }

    #[test]
    fn test_personality_and_salary_sections() {
        let norm = normalize_profile(&json!({
            "skills": ["x"],
            "personality": { "type": "Analytical", "work_style": "Independent",
                             "env_pref": "Quiet", "stress_handling": "Calm" },
            "salaryExpectations": { "range": "50k-80k" },
            "work_environment": { "options": ["Remote"] }
        }));
        assert_eq!(norm.personality_work_type.as_deref(), Some("Analytical"));
        assert_eq!(norm.personality_work_style.as_deref(), Some("Independent"));
        assert_eq!(norm.personality_env_pref.as_deref(), Some("Quiet"));
        assert_eq!(norm.personality_stress_handling.as_deref(), Some("Calm"));
        assert_eq!(norm.salary_expectation.as_deref(), Some("50k-80k"));
        assert_eq!(norm.preferred_work_environment, vec!["Remote"]);
    }

    #[test]
    fn test_blank_scalar_falls_through() {
        let norm = normalize_profile(&json!({
            "learning_pace": "  ",
            "learning_preferences": { "learning_pace": "Moderate" }
        }));
        assert_eq!(norm.learning_pace.as_deref(), Some("Moderate"));
    }

    #[test]
    fn test_malformed_input_never_fails() {
        for raw in [
            json!(null),
            json!("profile"),
            json!([1, 2, 3]),
            json!({ "skills": "Python", "personality": ["odd"], "salary": "high" }),
            json!({ "profile": "not an object" }),
        ] {
            let norm = normalize_profile(&raw);
            assert!(norm.skills.is_empty());
            assert!(norm.salary_expectation.is_none());
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = json!({
            "profile": {
                "skills": { "a": ["Python"] },
                "strengthsWeaknesses": { "weaknesses": ["Procrastination"] },
                "learningPreferences": { "pace": "fast", "formats": ["Reading"] },
                "personality": { "work_type": "Creative" }
            }
        });
        let once = normalize_profile(&raw);
        let twice = normalize_profile(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_string_elements() {
        assert_eq!(
            extract_any_list(&json!(["a", 3, true, null, {"k": 1}, ["nested"]])),
            vec!["a", "3", "true"]
        );
    }
}
