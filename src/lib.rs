//! Scoring and recommendation engine for the student media publisher
//! self-assessment questionnaire.

pub mod assessment;
