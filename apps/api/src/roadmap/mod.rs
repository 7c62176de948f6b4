// Roadmaps: template models, the template store, and per-user personalization
// (skill gaps, task priorities, pace-adjusted durations).

pub mod handlers;
pub mod models;
pub mod personalizer;
pub mod store;
