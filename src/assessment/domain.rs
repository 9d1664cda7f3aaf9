use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Impact,
    Resilience,
    Financial,
    Education,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Impact,
            Self::Resilience,
            Self::Financial,
            Self::Education,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Impact => "Journalistic Impact",
            Self::Resilience => "Operational Resilience",
            Self::Financial => "Financial Health",
            Self::Education => "Experience & Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    MultipleChoice,
    Scale,
    Boolean,
}

/// Catalog entry pairing a prompt with its scoring weight.
///
/// `options` is populated only for multiple-choice questions and lists the
/// choices in presentation order.
#[derive(Debug, Clone)]
pub struct Question {
    pub key: &'static str,
    pub category: Category,
    pub text: &'static str,
    pub kind: AnswerKind,
    pub options: Vec<&'static str>,
    pub weight: f64,
}

impl Question {
    /// Convert a raw selection into a scoreable response.
    ///
    /// Multiple-choice selections use inverse-rank encoding: the first
    /// option scores highest, the last scores lowest.
    pub fn respond(&self, answer: Answer) -> Result<Response, AnswerError> {
        let (value, text) = match (self.kind, answer) {
            (AnswerKind::MultipleChoice, Answer::Choice(index)) => {
                let label =
                    self.options
                        .get(index)
                        .copied()
                        .ok_or(AnswerError::OptionOutOfRange {
                            index,
                            available: self.options.len(),
                        })?;
                ((self.options.len() - index) as u8, label.to_string())
            }
            (AnswerKind::Scale, Answer::Scale(value)) => {
                if !(1..=5).contains(&value) {
                    return Err(AnswerError::ScaleOutOfRange(value));
                }
                (value, format!("{value}/5"))
            }
            (AnswerKind::Boolean, Answer::YesNo(true)) => (5, "Yes".to_string()),
            (AnswerKind::Boolean, Answer::YesNo(false)) => (1, "No".to_string()),
            (expected, _) => {
                return Err(AnswerError::KindMismatch {
                    question: self.key,
                    expected,
                })
            }
        };

        Ok(Response {
            question_id: self.key.to_string(),
            value,
            text,
        })
    }
}

/// Caller-side selection for a question, prior to value conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Zero-based index into the question's option list.
    Choice(usize),
    /// Direct 1-5 rating.
    Scale(u8),
    YesNo(bool),
}

/// One recorded answer. `value` feeds scoring; `text` is a display echo and
/// never participates in score computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    pub value: u8,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("question {question} expects a {expected:?} answer")]
    KindMismatch {
        question: &'static str,
        expected: AnswerKind,
    },
    #[error("option index {index} out of range ({available} options)")]
    OptionOutOfRange { index: usize, available: usize },
    #[error("scale value {0} outside 1-5")]
    ScaleOutOfRange(u8),
}

/// Four-level display scale derived from a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Beginner,
    Developing,
    Proficient,
    Advanced,
}

impl ScoreLevel {
    /// Inclusive lower bounds, evaluated highest-first.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage >= 80 {
            Self::Advanced
        } else if percentage >= 60 {
            Self::Proficient
        } else if percentage >= 40 {
            Self::Developing
        } else {
            Self::Beginner
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Developing => "Developing",
            Self::Proficient => "Proficient",
            Self::Advanced => "Advanced",
        }
    }
}
