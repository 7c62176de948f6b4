//! Attribute similarity primitives used by the career scorer.
//!
//! All functions are pure. List comparisons work on sets of trimmed, non-empty
//! string forms (case-sensitive); scalar comparisons are case-insensitive.

use std::collections::HashSet;

/// Builds the comparison set for a list attribute: trimmed, blanks dropped.
pub fn to_set<S: AsRef<str>>(items: &[S]) -> HashSet<&str> {
    items
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

fn overlap_ratio<U: AsRef<str>, R: AsRef<str>>(user: &[U], reference: &[R]) -> f64 {
    let u = to_set(user);
    if u.is_empty() {
        return 0.0;
    }
    let r = to_set(reference);
    let inter = u.intersection(&r).count();
    inter as f64 / u.len().max(1) as f64
}

/// `|user ∩ reference| / |user|`, in `[0, 1]`. Zero when the user list is empty.
pub fn list_similarity<U: AsRef<str>, R: AsRef<str>>(user: &[U], reference: &[R]) -> f64 {
    overlap_ratio(user, reference)
}

/// Negated overlap ratio, in `[-1, 0]`. Used where overlap is undesirable.
pub fn list_penalty<U: AsRef<str>, R: AsRef<str>>(user: &[U], reference: &[R]) -> f64 {
    -overlap_ratio(user, reference)
}

/// 1.0 when both values are present and equal ignoring case and surrounding
/// whitespace, 0.0 otherwise.
pub fn scalar_similarity(user: Option<&str>, reference: Option<&str>) -> f64 {
    match (user.map(str::trim), reference.map(str::trim)) {
        (Some(u), Some(r)) if !u.is_empty() && !r.is_empty() => {
            if u.to_lowercase() == r.to_lowercase() {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

/// Mean of several scalar similarities. An empty slice scores 0.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
