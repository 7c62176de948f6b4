//! Career Scorer — weighted multi-attribute similarity against the reference dataset.
//!
//! Algorithm:
//! 1. Normalize the user profile
//! 2. Score every reference row: Σ(weight × component) over nine components
//! 3. Keep the best row per career (first occurrence wins ties)
//! 4. Sort careers by best score descending (stable), take `top_k`
//! 5. Divide by the best score among them so the leader scores 1.0
//! 6. Attach matched skills from the winning row (or its first five skills)

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::matching::dataset::{ReferenceDataset, ReferenceRow};
use crate::matching::similarity::{list_penalty, list_similarity, mean, scalar_similarity, to_set};
use crate::profile::models::NormalizedProfile;
use crate::profile::normalizer::normalize_profile;

/// Number of row skills reported when the user shares none with the winning row.
const FALLBACK_SKILL_COUNT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Weights and per-row components
// ────────────────────────────────────────────────────────────────────────────

/// Relative importance of each component. Scores are normalized against the
/// best career afterwards, so only the ratios matter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeWeights {
    pub skills: f64,
    pub interests: f64,
    pub strengths: f64,
    /// Applied to a penalty in `[-1, 0]`, so a positive weight lowers the score.
    pub weaknesses: f64,
    pub learning_formats: f64,
    pub preferred_work_environment: f64,
    pub personality: f64,
    pub learning_mode: f64,
    pub salary: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            skills: 0.25,
            interests: 0.20,
            strengths: 0.15,
            weaknesses: 0.05,
            learning_formats: 0.10,
            preferred_work_environment: 0.15,
            personality: 0.05,
            learning_mode: 0.03,
            salary: 0.02,
        }
    }
}

/// Unweighted component scores of one user/row comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skills: f64,
    pub interests: f64,
    pub strengths: f64,
    pub weaknesses: f64,
    pub learning_formats: f64,
    pub preferred_work_environment: f64,
    pub personality: f64,
    pub learning_mode: f64,
    pub salary: f64,
}

impl ComponentScores {
    pub fn compute(user: &NormalizedProfile, row: &NormalizedProfile) -> Self {
        let scalar = |u: &Option<String>, r: &Option<String>| {
            scalar_similarity(u.as_deref(), r.as_deref())
        };

        Self {
            skills: list_similarity(&user.skills, &row.skills),
            interests: list_similarity(&user.interests, &row.interests),
            strengths: list_similarity(&user.strengths, &row.strengths),
            weaknesses: list_penalty(&user.weaknesses, &row.weaknesses),
            learning_formats: list_similarity(&user.learning_formats, &row.learning_formats),
            preferred_work_environment: list_similarity(
                &user.preferred_work_environment,
                &row.preferred_work_environment,
            ),
            personality: mean(&[
                scalar(&user.personality_work_type, &row.personality_work_type),
                scalar(&user.personality_work_style, &row.personality_work_style),
                scalar(&user.personality_env_pref, &row.personality_env_pref),
                scalar(&user.personality_stress_handling, &row.personality_stress_handling),
            ]),
            learning_mode: mean(&[
                scalar(&user.learning_pace, &row.learning_pace),
                scalar(&user.mode_preference, &row.mode_preference),
            ]),
            salary: scalar(&user.salary_expectation, &row.salary_expectation),
        }
    }

    pub fn weighted(&self, w: &AttributeWeights) -> f64 {
        w.skills * self.skills
            + w.interests * self.interests
            + w.strengths * self.strengths
            + w.weaknesses * self.weaknesses
            + w.learning_formats * self.learning_formats
            + w.preferred_work_environment * self.preferred_work_environment
            + w.personality * self.personality
            + w.learning_mode * self.learning_mode
            + w.salary * self.salary
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerRecommendation {
    pub career: String,
    /// Relative to the best returned career, in `[0, 1]`, 4 decimals.
    pub score: f64,
    pub top_skills: Vec<String>,
}

/// Best-scoring row of one career.
struct CareerBest<'a> {
    row: &'a ReferenceRow,
    score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

/// Ranks careers for a profile. Holds the immutable dataset snapshot; every call
/// is a pure pass over it, so a single instance is shared across requests.
#[derive(Debug, Clone)]
pub struct CareerScorer {
    dataset: Arc<ReferenceDataset>,
    weights: AttributeWeights,
}

impl CareerScorer {
    pub fn new(dataset: Arc<ReferenceDataset>, weights: AttributeWeights) -> Self {
        Self { dataset, weights }
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    /// Normalizes a raw client profile and ranks careers for it.
    pub fn recommend(&self, raw_profile: &Value, top_k: usize) -> Vec<CareerRecommendation> {
        let user = normalize_profile(raw_profile);
        self.recommend_normalized(&user, top_k)
    }

    pub fn recommend_normalized(
        &self,
        user: &NormalizedProfile,
        top_k: usize,
    ) -> Vec<CareerRecommendation> {
        let rows = self.dataset.rows();
        if rows.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut ranked = self.best_per_career(user, rows);
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        let max_score = ranked
            .iter()
            .map(|c| c.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let divisor = if max_score > 0.0 { max_score } else { 1.0 };

        debug!(
            "Scored {} rows, returning {} careers (best raw score {:.4})",
            rows.len(),
            ranked.len(),
            max_score
        );

        ranked
            .into_iter()
            .map(|best| CareerRecommendation {
                career: best.row.career.clone(),
                score: round4((best.score / divisor).clamp(0.0, 1.0)),
                top_skills: top_skills(&user.skills, &best.row.attributes.skills),
            })
            .collect()
    }

    /// One entry per distinct career, in first-seen order. A later row replaces
    /// the current best only when strictly better.
    fn best_per_career<'a>(
        &self,
        user: &NormalizedProfile,
        rows: &'a [ReferenceRow],
    ) -> Vec<CareerBest<'a>> {
        let mut best: Vec<CareerBest<'a>> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for row in rows {
            let score = ComponentScores::compute(user, &row.attributes).weighted(&self.weights);
            match index.get(row.career.as_str()) {
                Some(&pos) => {
                    if score > best[pos].score {
                        best[pos] = CareerBest { row, score };
                    }
                }
                None => {
                    index.insert(row.career.as_str(), best.len());
                    best.push(CareerBest { row, score });
                }
            }
        }

        best
    }
}

/// Skills shared by the user and the row, in the user's order. Falls back to the
/// row's first listed skills when nothing is shared.
fn top_skills(user_skills: &[String], row_skills: &[String]) -> Vec<String> {
    let row_set = to_set(row_skills);
    let mut seen = HashSet::new();

    let matched: Vec<String> = user_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| row_set.contains(s) && seen.insert(*s))
        .map(str::to_string)
        .collect();

    if matched.is_empty() {
        row_skills.iter().take(FALLBACK_SKILL_COUNT).cloned().collect()
    } else {
        matched
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
