// Profile normalization: every client profile shape funnels into `NormalizedProfile`
// before it reaches the scorer or the roadmap personalizer.

pub mod models;
pub mod normalizer;
