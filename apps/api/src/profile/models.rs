use serde::{Deserialize, Serialize};

/// Canonical flat attribute set shared by user profiles and reference rows.
///
/// Every attribute is always present: list attributes default to `[]`,
/// scalar attributes to `None` (serialized as `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub learning_formats: Vec<String>,
    pub preferred_work_environment: Vec<String>,
    pub personality_work_type: Option<String>,
    pub personality_work_style: Option<String>,
    pub personality_env_pref: Option<String>,
    pub personality_stress_handling: Option<String>,
    pub learning_pace: Option<String>,
    pub mode_preference: Option<String>,
    pub salary_expectation: Option<String>,
}

/// List-valued attributes of the fixed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAttribute {
    Skills,
    Interests,
    Strengths,
    Weaknesses,
    LearningFormats,
    PreferredWorkEnvironment,
}

/// Scalar-valued attributes of the fixed schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarAttribute {
    PersonalityWorkType,
    PersonalityWorkStyle,
    PersonalityEnvPref,
    PersonalityStressHandling,
    LearningPace,
    ModePreference,
    SalaryExpectation,
}

impl ListAttribute {
    pub const ALL: [ListAttribute; 6] = [
        ListAttribute::Skills,
        ListAttribute::Interests,
        ListAttribute::Strengths,
        ListAttribute::Weaknesses,
        ListAttribute::LearningFormats,
        ListAttribute::PreferredWorkEnvironment,
    ];

    /// Column / top-level key name.
    pub fn key(self) -> &'static str {
        match self {
            ListAttribute::Skills => "skills",
            ListAttribute::Interests => "interests",
            ListAttribute::Strengths => "strengths",
            ListAttribute::Weaknesses => "weaknesses",
            ListAttribute::LearningFormats => "learning_formats",
            ListAttribute::PreferredWorkEnvironment => "preferred_work_environment",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

impl ScalarAttribute {
    pub const ALL: [ScalarAttribute; 7] = [
        ScalarAttribute::PersonalityWorkType,
        ScalarAttribute::PersonalityWorkStyle,
        ScalarAttribute::PersonalityEnvPref,
        ScalarAttribute::PersonalityStressHandling,
        ScalarAttribute::LearningPace,
        ScalarAttribute::ModePreference,
        ScalarAttribute::SalaryExpectation,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScalarAttribute::PersonalityWorkType => "personality_work_type",
            ScalarAttribute::PersonalityWorkStyle => "personality_work_style",
            ScalarAttribute::PersonalityEnvPref => "personality_env_pref",
            ScalarAttribute::PersonalityStressHandling => "personality_stress_handling",
            ScalarAttribute::LearningPace => "learning_pace",
            ScalarAttribute::ModePreference => "mode_preference",
            ScalarAttribute::SalaryExpectation => "salary_expectation",
        }
    }
}

impl NormalizedProfile {
    pub fn list(&self, attr: ListAttribute) -> &[String] {
        match attr {
            ListAttribute::Skills => &self.skills,
            ListAttribute::Interests => &self.interests,
            ListAttribute::Strengths => &self.strengths,
            ListAttribute::Weaknesses => &self.weaknesses,
            ListAttribute::LearningFormats => &self.learning_formats,
            ListAttribute::PreferredWorkEnvironment => &self.preferred_work_environment,
        }
    }

    pub fn list_mut(&mut self, attr: ListAttribute) -> &mut Vec<String> {
        match attr {
            ListAttribute::Skills => &mut self.skills,
            ListAttribute::Interests => &mut self.interests,
            ListAttribute::Strengths => &mut self.strengths,
            ListAttribute::Weaknesses => &mut self.weaknesses,
            ListAttribute::LearningFormats => &mut self.learning_formats,
            ListAttribute::PreferredWorkEnvironment => &mut self.preferred_work_environment,
        }
    }

    pub fn scalar_mut(&mut self, attr: ScalarAttribute) -> &mut Option<String> {
        match attr {
            ScalarAttribute::PersonalityWorkType => &mut self.personality_work_type,
            ScalarAttribute::PersonalityWorkStyle => &mut self.personality_work_style,
            ScalarAttribute::PersonalityEnvPref => &mut self.personality_env_pref,
            ScalarAttribute::PersonalityStressHandling => &mut self.personality_stress_handling,
            ScalarAttribute::LearningPace => &mut self.learning_pace,
            ScalarAttribute::ModePreference => &mut self.mode_preference,
            ScalarAttribute::SalaryExpectation => &mut self.salary_expectation,
        }
    }
}
