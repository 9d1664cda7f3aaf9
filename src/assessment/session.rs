use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{Answer, AnswerError, Question, Response};
use super::recommendations::{RecommendationEngine, RulebookError};
use super::report::AssessmentSummary;
use super::scoring::compute_scores;

/// Position within the linear Welcome -> Questions -> Results flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Welcome,
    /// Zero-based index into the catalog.
    Question(usize),
    Results,
}

/// Mutable answer-collection state layered over the immutable catalog.
///
/// The session enforces the single progression rule: a question must hold
/// exactly one response before the flow can advance past it. Re-answering
/// replaces the earlier response for that question.
#[derive(Debug)]
pub struct AssessmentSession {
    catalog: QuestionCatalog,
    responses: Vec<Response>,
    step: SessionStep,
}

impl AssessmentSession {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            responses: Vec::new(),
            step: SessionStep::Welcome,
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn step(&self) -> SessionStep {
        self.step
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Leave the welcome screen and present the first question.
    pub fn start(&mut self) {
        if self.step == SessionStep::Welcome {
            self.step = SessionStep::Question(0);
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            SessionStep::Question(index) => self.catalog.questions().get(index),
            _ => None,
        }
    }

    /// Record an answer for the current question, replacing any earlier
    /// response to the same question.
    pub fn answer(&mut self, answer: Answer) -> Result<(), SessionError> {
        let question = self.current_question().ok_or(SessionError::NotCollecting)?;
        let response = question.respond(answer)?;

        self.responses
            .retain(|existing| existing.question_id != response.question_id);
        self.responses.push(response);
        Ok(())
    }

    pub fn response_for(&self, key: &str) -> Option<&Response> {
        self.responses
            .iter()
            .find(|response| response.question_id == key)
    }

    pub fn current_response(&self) -> Option<&Response> {
        self.current_question()
            .and_then(|question| self.response_for(question.key))
    }

    /// A question step can only advance once it has a recorded response.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            SessionStep::Question(_) => self.current_response().is_some(),
            _ => true,
        }
    }

    pub fn next(&mut self) -> Result<(), SessionError> {
        match self.step {
            SessionStep::Question(index) => {
                if self.current_response().is_none() {
                    return Err(SessionError::ResponseRequired);
                }
                self.step = if index + 1 >= self.catalog.len() {
                    SessionStep::Results
                } else {
                    SessionStep::Question(index + 1)
                };
                debug!(step = ?self.step, "session advanced");
                Ok(())
            }
            _ => Err(SessionError::NotCollecting),
        }
    }

    pub fn previous(&mut self) -> Result<(), SessionError> {
        match self.step {
            SessionStep::Question(index) if index > 0 => {
                self.step = SessionStep::Question(index - 1);
                Ok(())
            }
            SessionStep::Question(_) => Err(SessionError::AtFirstQuestion),
            _ => Err(SessionError::NotCollecting),
        }
    }

    /// (current step, total questions) for progress display.
    pub fn progress(&self) -> (usize, usize) {
        let current = match self.step {
            SessionStep::Welcome => 0,
            SessionStep::Question(index) => index + 1,
            SessionStep::Results => self.catalog.len(),
        };
        (current, self.catalog.len())
    }

    /// Drop all responses and return to the welcome screen.
    pub fn restart(&mut self) {
        self.responses.clear();
        self.step = SessionStep::Welcome;
    }

    /// Score the collected responses and assemble the roadmap. Only valid
    /// once the flow has stepped through every question; the summary is
    /// recomputed fresh on each call.
    pub fn results(
        &self,
        engine: &RecommendationEngine,
    ) -> Result<AssessmentSummary, SessionError> {
        if self.step != SessionStep::Results {
            return Err(SessionError::NotFinished);
        }

        let scores = compute_scores(&self.catalog, &self.responses);
        let recommendations = engine.recommend(&scores)?;
        Ok(AssessmentSummary::new(scores, recommendations))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session is not currently presenting a question")]
    NotCollecting,
    #[error("the current question requires a response before proceeding")]
    ResponseRequired,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("assessment is not finished")]
    NotFinished,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Rulebook(#[from] RulebookError),
}
