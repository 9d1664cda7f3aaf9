use chrono::NaiveDate;
use media_assessment::assessment::domain::{Answer, AnswerError, AnswerKind, ScoreLevel};
use media_assessment::assessment::recommendations::Priority;
use media_assessment::assessment::{
    AssessmentSession, RecommendationEngine, SessionError, SessionStep,
};

/// Answer every remaining question with a strong response.
fn answer_all(session: &mut AssessmentSession) {
    while let Some(kind) = session.current_question().map(|question| question.kind) {
        let answer = match kind {
            AnswerKind::MultipleChoice => Answer::Choice(0),
            AnswerKind::Scale => Answer::Scale(4),
            AnswerKind::Boolean => Answer::YesNo(true),
        };
        session.answer(answer).expect("answer accepted");
        session.next().expect("advance accepted");
    }
}

#[test]
fn full_walk_reaches_results_with_scores_and_roadmap() {
    let mut session = AssessmentSession::standard();
    assert_eq!(session.step(), SessionStep::Welcome);
    assert_eq!(session.progress(), (0, 20));

    session.start();
    assert_eq!(session.progress(), (1, 20));

    answer_all(&mut session);
    assert_eq!(session.step(), SessionStep::Results);
    assert_eq!(session.progress(), (20, 20));

    let engine = RecommendationEngine::standard();
    let summary = session.results(&engine).expect("assessment finished");

    assert_eq!(summary.scores.len(), 4);
    assert_eq!(summary.recommendations.len(), 4);
    assert_eq!(summary.overall.percentage, 94);
    assert_eq!(summary.overall.level, ScoreLevel::Advanced);

    // Strong responses across the board leave every category at Low priority,
    // so the roadmap keeps the fixed category order.
    assert!(summary
        .recommendations
        .iter()
        .all(|recommendation| recommendation.priority == Priority::Low));
    assert_eq!(summary.recommendations[0].label, "Journalistic Impact");
}

#[test]
fn report_text_lists_overall_breakdown_and_roadmap() {
    let mut session = AssessmentSession::standard();
    session.start();
    answer_all(&mut session);

    let engine = RecommendationEngine::standard();
    let summary = session.results(&engine).expect("assessment finished");

    let generated_on = NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date");
    let report = summary.render_text(generated_on);

    assert!(report.starts_with("STUDENT MEDIA PUBLISHER ASSESSMENT RESULTS"));
    assert!(report.contains("Overall Score: 94% (Advanced)"));
    assert!(report.contains("CATEGORY BREAKDOWN:"));
    assert!(report.contains("Journalistic Impact: 96% (Advanced)"));
    assert!(report.contains("Operational Resilience: 93% (Advanced)"));
    assert!(report.contains("PERSONALIZED ROADMAP:"));
    assert!(report.contains("LOW PRIORITY: Maintain Excellence"));
    assert!(report.contains("• Experiment with new storytelling formats"));
    assert!(report.contains("Generated on: 2025-10-01"));
}

#[test]
fn advancing_requires_a_response() {
    let mut session = AssessmentSession::standard();
    session.start();

    assert!(!session.can_proceed());
    match session.next() {
        Err(SessionError::ResponseRequired) => {}
        other => panic!("expected response-required error, got {other:?}"),
    }

    session.answer(Answer::Choice(1)).expect("answer accepted");
    assert!(session.can_proceed());
    session.next().expect("advance accepted");
    assert_eq!(session.step(), SessionStep::Question(1));
}

#[test]
fn answers_are_rejected_outside_the_question_phase() {
    let mut session = AssessmentSession::standard();

    match session.answer(Answer::Scale(3)) {
        Err(SessionError::NotCollecting) => {}
        other => panic!("expected not-collecting error, got {other:?}"),
    }
}

#[test]
fn mismatched_answer_kinds_are_rejected() {
    let mut session = AssessmentSession::standard();
    session.start();

    // The first question is multiple-choice.
    match session.answer(Answer::Scale(3)) {
        Err(SessionError::Answer(AnswerError::KindMismatch { question, .. })) => {
            assert_eq!(question, "impact-1");
        }
        other => panic!("expected kind mismatch, got {other:?}"),
    }

    match session.answer(Answer::Choice(9)) {
        Err(SessionError::Answer(AnswerError::OptionOutOfRange { index: 9, .. })) => {}
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn reanswering_replaces_the_earlier_response() {
    let mut session = AssessmentSession::standard();
    session.start();

    session.answer(Answer::Choice(2)).expect("answer accepted");
    session.answer(Answer::Choice(0)).expect("answer accepted");

    assert_eq!(session.responses().len(), 1);
    let response = session.current_response().expect("response recorded");
    assert_eq!(response.value, 5);
    assert_eq!(response.text, "Daily");
}

#[test]
fn previous_steps_back_but_not_past_the_first_question() {
    let mut session = AssessmentSession::standard();
    session.start();

    match session.previous() {
        Err(SessionError::AtFirstQuestion) => {}
        other => panic!("expected at-first-question error, got {other:?}"),
    }

    session.answer(Answer::Choice(0)).expect("answer accepted");
    session.next().expect("advance accepted");
    session.previous().expect("step back accepted");

    assert_eq!(session.step(), SessionStep::Question(0));
    // The earlier response is still attached to the revisited question.
    assert!(session.current_response().is_some());
}

#[test]
fn results_are_refused_before_the_flow_finishes() {
    let mut session = AssessmentSession::standard();
    session.start();

    let engine = RecommendationEngine::standard();
    match session.results(&engine) {
        Err(SessionError::NotFinished) => {}
        other => panic!("expected not-finished error, got {other:?}"),
    }
}

#[test]
fn restart_clears_responses_and_returns_to_welcome() {
    let mut session = AssessmentSession::standard();
    session.start();
    session.answer(Answer::Choice(0)).expect("answer accepted");
    session.next().expect("advance accepted");

    session.restart();

    assert_eq!(session.step(), SessionStep::Welcome);
    assert!(session.responses().is_empty());
}
