use chrono::NaiveDate;
use serde::Serialize;

use super::domain::ScoreLevel;
use super::recommendations::Recommendation;
use super::scoring::CategoryScore;

/// Mean of the category percentages, expressed on the display scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverallScore {
    pub percentage: u8,
    pub level: ScoreLevel,
}

/// Complete assessment output handed to presentation.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub overall: OverallScore,
    pub scores: Vec<CategoryScore>,
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentSummary {
    pub fn new(scores: Vec<CategoryScore>, recommendations: Vec<Recommendation>) -> Self {
        let percentage = if scores.is_empty() {
            0
        } else {
            let total: u32 = scores.iter().map(|score| u32::from(score.percentage)).sum();
            (f64::from(total) / scores.len() as f64).round() as u8
        };

        Self {
            overall: OverallScore {
                percentage,
                level: ScoreLevel::from_percentage(percentage),
            },
            scores,
            recommendations,
        }
    }

    /// Render the downloadable plain-text report.
    ///
    /// Pure formatting over the summary; the generation date is supplied by
    /// the caller.
    pub fn render_text(&self, generated_on: NaiveDate) -> String {
        let mut lines = Vec::new();

        lines.push("STUDENT MEDIA PUBLISHER ASSESSMENT RESULTS".to_string());
        lines.push(String::new());
        lines.push(format!(
            "Overall Score: {}% ({})",
            self.overall.percentage,
            self.overall.level.label()
        ));
        lines.push(String::new());

        lines.push("CATEGORY BREAKDOWN:".to_string());
        for score in &self.scores {
            lines.push(format!(
                "{}: {}% ({})",
                score.label,
                score.percentage,
                score.level.label()
            ));
        }
        lines.push(String::new());

        lines.push("PERSONALIZED ROADMAP:".to_string());
        for recommendation in &self.recommendations {
            lines.push(String::new());
            lines.push(format!(
                "{} PRIORITY: {}",
                recommendation.priority.label().to_uppercase(),
                recommendation.title
            ));
            lines.push(format!("Category: {}", recommendation.label));
            lines.push(recommendation.description.to_string());
            lines.push(String::new());
            lines.push("Action Items:".to_string());
            for item in &recommendation.action_items {
                lines.push(format!("• {item}"));
            }
            lines.push(String::new());
            lines.push("Resources:".to_string());
            for resource in &recommendation.resources {
                lines.push(format!("• {resource}"));
            }
        }

        lines.push(String::new());
        lines.push(format!("Generated on: {generated_on}"));

        lines.join("\n")
    }
}
