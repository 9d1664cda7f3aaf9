use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{Category, Response, ScoreLevel};

/// Weighted result for one assessment category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub percentage: u8,
    pub level: ScoreLevel,
}

/// Compute one score per category, in fixed category order.
///
/// Responses referencing unknown question ids contribute nothing; repeated
/// responses for the same id resolve last-write-wins. Unanswered questions
/// still count toward the category maximum, so partial response sets lower
/// the percentage without raising an error. Percentages round half away
/// from zero; a category with no questions scores 0%.
pub fn compute_scores(catalog: &QuestionCatalog, responses: &[Response]) -> Vec<CategoryScore> {
    // Later entries win when a question id repeats in the input.
    let mut latest: HashMap<&str, u8> = HashMap::new();
    for response in responses {
        latest.insert(response.question_id.as_str(), response.value);
    }

    Category::ordered()
        .into_iter()
        .map(|category| {
            let questions = catalog.questions_for_category(category);

            let score: f64 = questions
                .iter()
                .filter_map(|question| {
                    latest
                        .get(question.key)
                        .map(|value| f64::from(*value) * question.weight)
                })
                .sum();

            let max_score: f64 = questions
                .iter()
                .map(|question| 5.0 * question.weight)
                .sum();

            let percentage = if max_score > 0.0 {
                (score / max_score * 100.0).round().clamp(0.0, 100.0) as u8
            } else {
                0
            };

            let level = ScoreLevel::from_percentage(percentage);
            debug!(category = category.label(), percentage, "category scored");

            CategoryScore {
                category,
                label: category.label(),
                score,
                max_score,
                percentage,
                level,
            }
        })
        .collect()
}
