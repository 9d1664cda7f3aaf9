mod bands;
mod rulebook;

pub use bands::{Priority, PriorityBand};
pub use rulebook::{RecommendationRulebook, RecommendationTemplate, RulebookError};

use serde::Serialize;
use tracing::debug;

use super::domain::Category;
use super::scoring::CategoryScore;

/// Stateless engine pairing category scores with roadmap content.
pub struct RecommendationEngine {
    rulebook: RecommendationRulebook,
}

impl RecommendationEngine {
    pub fn new(rulebook: RecommendationRulebook) -> Self {
        Self { rulebook }
    }

    pub fn standard() -> Self {
        Self::new(RecommendationRulebook::standard())
    }

    /// Produce exactly one recommendation per score, ordered by priority
    /// weight descending. The sort is stable, so equal priorities keep the
    /// caller's category order.
    ///
    /// A missing (category, band) entry is a configuration error; with the
    /// standard rulebook it cannot occur.
    pub fn recommend(
        &self,
        scores: &[CategoryScore],
    ) -> Result<Vec<Recommendation>, RulebookError> {
        let mut recommendations = scores
            .iter()
            .map(|score| {
                let band = PriorityBand::from_percentage(score.percentage);
                let template = self.rulebook.template(score.category, band).ok_or(
                    RulebookError::MissingEntry {
                        category: score.category,
                        band,
                    },
                )?;

                Ok(Recommendation {
                    category: score.category,
                    label: score.category.label(),
                    priority: band.priority(),
                    title: template.title,
                    description: template.description,
                    action_items: template.action_items.clone(),
                    resources: template.resources.clone(),
                })
            })
            .collect::<Result<Vec<_>, RulebookError>>()?;

        recommendations.sort_by_key(|recommendation| {
            std::cmp::Reverse(recommendation.priority.weight())
        });

        debug!(count = recommendations.len(), "roadmap assembled");
        Ok(recommendations)
    }
}

/// Single roadmap entry tied to an assessed category.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub label: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: &'static str,
    pub action_items: Vec<&'static str>,
    pub resources: Vec<&'static str>,
}
