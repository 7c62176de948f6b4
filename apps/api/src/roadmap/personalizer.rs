//! Roadmap Personalizer — adapts a career roadmap template to one user.
//!
//! Algorithm:
//! 1. Lowercased, trimmed user skill set (from the normalized profile)
//! 2. Core / nice-to-have gaps = template skills the user lacks, template order kept
//! 3. Pace factor from learning pace: fast 0.75, moderate 1.0, slow 1.5, else 1.0
//! 4. Phase duration × pace factor, rounded to one decimal
//! 5. Task priority: all related skills held → low; any related skill is a gap → high;
//!    otherwise medium. The checks run in that order.
//! 6. Format hint from declared learning formats

use std::collections::HashSet;

use serde_json::Value;

use crate::profile::models::NormalizedProfile;
use crate::profile::normalizer::normalize_profile;
use crate::roadmap::models::{
    PersonalizedPhase, PersonalizedRoadmap, PersonalizedTask, PhaseTemplate, RoadmapTemplate,
    SkillGaps, TaskPriority, TaskStatus, TaskTemplate,
};

pub const VIDEO_HINT: &str = "Prefer video courses and recorded lectures.";
pub const PROJECT_HINT: &str = "Prefer project-based resources and practical tasks.";
pub const READING_HINT: &str = "Prefer articles, documentation, and books.";
pub const MIXED_HINT: &str = "Use a mix of video, text, and projects.";

/// Duration multiplier for a learning pace label. Unknown or missing → 1.0.
pub fn pace_factor(learning_pace: Option<&str>) -> f64 {
    match learning_pace.map(|p| p.trim().to_lowercase()).as_deref() {
        Some("fast") => 0.75,
        Some("slow") => 1.5,
        _ => 1.0,
    }
}

/// Picks a resource-format hint. First matching category wins:
/// video, then project / hands-on, then text / reading.
pub fn pick_format_hint<S: AsRef<str>>(learning_formats: &[S]) -> &'static str {
    let formats: Vec<String> = learning_formats
        .iter()
        .map(|f| f.as_ref().to_lowercase())
        .collect();
    let any = |needles: &[&str]| formats.iter().any(|f| needles.iter().any(|n| f.contains(n)));

    if any(&["video"]) {
        VIDEO_HINT
    } else if any(&["project", "hands-on"]) {
        PROJECT_HINT
    } else if any(&["text", "reading"]) {
        READING_HINT
    } else {
        MIXED_HINT
    }
}

/// Personalizes a template for a raw client profile.
pub fn personalize_roadmap(template: &RoadmapTemplate, raw_profile: &Value) -> PersonalizedRoadmap {
    personalize_normalized(template, &normalize_profile(raw_profile))
}

pub fn personalize_normalized(
    template: &RoadmapTemplate,
    user: &NormalizedProfile,
) -> PersonalizedRoadmap {
    let user_skills = lowercase_set(&user.skills);

    let skill_gaps = SkillGaps {
        core_missing: missing_skills(&template.core_skills, &user_skills),
        nice_to_have_missing: missing_skills(&template.nice_to_have_skills, &user_skills),
    };
    let gap_set: HashSet<String> = skill_gaps
        .core_missing
        .iter()
        .chain(&skill_gaps.nice_to_have_missing)
        .map(|s| s.to_lowercase())
        .collect();

    let factor = pace_factor(user.learning_pace.as_deref());
    let hint = pick_format_hint(&user.learning_formats);

    let phases = template
        .phases
        .iter()
        .map(|phase| personalize_phase(phase, factor, &user_skills, &gap_set, hint))
        .collect();

    PersonalizedRoadmap {
        career: template.career.clone(),
        slug: template.slug.clone(),
        short_description: template.short_description.clone(),
        skill_gaps,
        pace_factor: factor,
        preferred_format_hint: hint.to_string(),
        phases,
        recommended_courses: template.recommended_courses.clone(),
    }
}

fn personalize_phase(
    phase: &PhaseTemplate,
    factor: f64,
    user_skills: &HashSet<String>,
    gaps: &HashSet<String>,
    hint: &str,
) -> PersonalizedPhase {
    PersonalizedPhase {
        id: phase.id.clone(),
        title: phase.title.clone(),
        recommended_duration_months: phase.recommended_duration_months,
        personalized_duration_months: round1(phase.recommended_duration_months * factor),
        tasks: phase
            .tasks
            .iter()
            .map(|task| personalize_task(task, user_skills, gaps, hint))
            .collect(),
    }
}

fn personalize_task(
    task: &TaskTemplate,
    user_skills: &HashSet<String>,
    gaps: &HashSet<String>,
    hint: &str,
) -> PersonalizedTask {
    let (priority, status) = classify_task(&task.related_skills, user_skills, gaps);
    PersonalizedTask {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        level: task.level.clone(),
        related_skills: task.related_skills.clone(),
        priority,
        status,
        preferred_format_hint: hint.to_string(),
    }
}

/// The "already strong" check must precede the gap check.
pub fn classify_task(
    related_skills: &[String],
    user_skills: &HashSet<String>,
    gaps: &HashSet<String>,
) -> (TaskPriority, TaskStatus) {
    let related: Vec<String> = related_skills.iter().map(|s| normalize_skill(s)).collect();

    if !related.is_empty() && related.iter().all(|s| user_skills.contains(s)) {
        (TaskPriority::Low, TaskStatus::AlreadyStrong)
    } else if related.iter().any(|s| gaps.contains(s)) {
        (TaskPriority::High, TaskStatus::Focus)
    } else {
        (TaskPriority::Medium, TaskStatus::Normal)
    }
}

/// Template skills the user lacks, in template order, spelled as in the
/// template. Repeats are reported once.
fn missing_skills(template_skills: &[String], user_skills: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    template_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let key = normalize_skill(s);
            !user_skills.contains(&key) && seen.insert(key)
        })
        .map(str::to_string)
        .collect()
}

fn lowercase_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect()
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// One-decimal rounding; exact ties go to the even digit (`2.25 -> 2.2`).
fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
