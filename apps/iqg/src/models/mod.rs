pub mod analysis;
pub mod generation;
pub mod questions;

pub use analysis::{AlignmentDetail, AnalysisResult, RoleAlignment};
pub use generation::{GenerationMetadata, GenerationResult};
pub use questions::{Category, QuestionEntry, QuestionItem, QuestionSet};
