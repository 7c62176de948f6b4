use serde::{Deserialize, Serialize};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────────────────
// Templates (read-only input)
// ────────────────────────────────────────────────────────────────────────────

fn default_phase_duration() -> f64 {
    3.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapTemplate {
    pub career: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub core_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    #[serde(default)]
    pub phases: Vec<PhaseTemplate>,
    /// Passed through to the personalized roadmap untouched.
    #[serde(default)]
    pub recommended_courses: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseTemplate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_phase_duration")]
    pub recommended_duration_months: f64,
    #[serde(default)]
    pub tasks: Vec<TaskTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskTemplate {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub related_skills: Vec<String>,
}

/// Listing entry for available templates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapSummary {
    pub career: String,
    pub slug: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Personalized output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "already strong")]
    AlreadyStrong,
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "normal")]
    Normal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGaps {
    pub core_missing: Vec<String>,
    pub nice_to_have_missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedTask {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub related_skills: Vec<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub preferred_format_hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedPhase {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub recommended_duration_months: f64,
    pub personalized_duration_months: f64,
    pub tasks: Vec<PersonalizedTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalizedRoadmap {
    pub career: String,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub skill_gaps: SkillGaps,
    pub pace_factor: f64,
    pub preferred_format_hint: String,
    pub phases: Vec<PersonalizedPhase>,
    pub recommended_courses: Vec<Value>,
}
