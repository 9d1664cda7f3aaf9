pub mod catalog;
pub mod domain;
pub mod recommendations;
pub mod report;
pub mod scoring;
mod session;

pub use catalog::QuestionCatalog;
pub use recommendations::{Recommendation, RecommendationEngine, RecommendationRulebook};
pub use report::{AssessmentSummary, OverallScore};
pub use scoring::{compute_scores, CategoryScore};
pub use session::{AssessmentSession, SessionError, SessionStep};
