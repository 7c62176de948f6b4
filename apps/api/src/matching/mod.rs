// Career matching: reference dataset, attribute similarity, weighted scoring,
// per-career ranking, and the master lists derived from the dataset.

pub mod dataset;
pub mod handlers;
pub mod scorer;
pub mod similarity;
pub mod vocabulary;
