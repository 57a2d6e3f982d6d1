//! Scoring canonical responses against a version's answer keys.
//!
//! Multiple-choice and short-answer questions are scored automatically.
//! Speaking and writing responses are left for a teacher and reported as
//! pending. Instructions and passages carry no score.
//!
//! Grading works in canonical order only. Display-order response sheets must
//! go through [`remap_responses`](crate::remap::remap_responses) first;
//! [`LayoutEngine::grade`](crate::LayoutEngine::grade) does that for you.

pub mod text;

use log::{debug, info, warn};
use serde::Serialize;

use exam_layout_core::{
    identifier::QuestionId,
    question::{Question, QuestionBody},
    response::{Response, ResponseOrder, Responses},
    version::Version,
};

use crate::config::GradingConfig;

/// How a single question was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum Outcome {
    Correct,
    /// A short answer within typo tolerance of an accepted answer.
    CloseEnough {
        distance: usize,
    },
    Incorrect,
    Unanswered,
    /// Awaiting a teacher's review.
    PendingReview,
    /// The question has no answer key or is not answerable.
    NotScored,
}

/// Scoring of one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    question_id: QuestionId,
    #[serde(flatten)]
    outcome: Outcome,
    points_awarded: f32,
    points_possible: f32,
}

impl QuestionResult {
    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn points_awarded(&self) -> f32 {
        self.points_awarded
    }

    pub fn points_possible(&self) -> f32 {
        self.points_possible
    }
}

/// Scoring of a whole attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    results: Vec<QuestionResult>,
    /// Points awarded by automatic grading.
    score: f32,
    /// Points available through automatic grading.
    max_score: f32,
    /// Points of answered questions still waiting for review.
    pending_points: f32,
}

impl GradeReport {
    /// Results in canonical question order.
    pub fn results(&self) -> &[QuestionResult] {
        &self.results
    }

    pub fn result(&self, question_id: &str) -> Option<&QuestionResult> {
        self.results
            .iter()
            .find(|result| result.question_id == question_id)
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn max_score(&self) -> f32 {
        self.max_score
    }

    pub fn pending_points(&self) -> f32 {
        self.pending_points
    }

    /// Returns `true` once nothing is waiting for review.
    pub fn is_complete(&self) -> bool {
        self.results
            .iter()
            .all(|result| result.outcome != Outcome::PendingReview)
    }
}

/// Grades a canonical response sheet.
///
/// A display-order sheet is graded as if it were canonical, which is only
/// right when the attempt had no layout; a warning is logged.
pub fn grade(version: &Version, responses: &Responses, config: &GradingConfig) -> GradeReport {
    if responses.order() == ResponseOrder::Display {
        warn!(version_id = version.id(); "Grading a display-order sheet as canonical");
    }

    let mut report = GradeReport::default();
    for question in version.questions() {
        let response = responses.get(question.id().as_str());
        let result = grade_question(question, response, config);
        debug!(
            question_id = question.id().as_str(),
            outcome:? = result.outcome;
            "Question graded"
        );

        if question.kind().is_manually_reviewed() {
            if result.outcome == Outcome::PendingReview {
                report.pending_points += result.points_possible;
            }
        } else if result.outcome != Outcome::NotScored {
            report.score += result.points_awarded;
            report.max_score += result.points_possible;
        }
        report.results.push(result);
    }

    info!(
        version_id = version.id(),
        score = report.score,
        max_score = report.max_score,
        pending_points = report.pending_points;
        "Responses graded"
    );
    report
}

fn grade_question(
    question: &Question,
    response: Option<&Response>,
    config: &GradingConfig,
) -> QuestionResult {
    let points = question.points();
    if !question.kind().is_answerable() {
        return QuestionResult {
            question_id: question.id().clone(),
            outcome: Outcome::NotScored,
            points_awarded: 0.0,
            points_possible: 0.0,
        };
    }

    let scored = |outcome: Outcome| {
        let awarded = match outcome {
            Outcome::Correct | Outcome::CloseEnough { .. } => points,
            _ => 0.0,
        };
        QuestionResult {
            question_id: question.id().clone(),
            outcome,
            points_awarded: awarded,
            points_possible: points,
        }
    };

    let outcome = match (question.body(), response) {
        (QuestionBody::Mcq { answer: None, .. }, _) => Outcome::NotScored,
        (QuestionBody::Short { answers }, _) if answers.is_empty() => Outcome::NotScored,
        (_, None) => Outcome::Unanswered,
        (QuestionBody::Mcq { answer: Some(key), .. }, Some(response)) => match response {
            Response::Choice(selected) if selected == key => Outcome::Correct,
            _ => Outcome::Incorrect,
        },
        (QuestionBody::Short { answers }, Some(response)) => match response {
            Response::Text(text) => grade_short(text, answers, config),
            _ => Outcome::Incorrect,
        },
        // Speaking and writing
        (_, Some(_)) => Outcome::PendingReview,
    };

    scored(outcome)
}

/// Compares a short answer with every accepted answer.
fn grade_short(text: &str, answers: &[String], config: &GradingConfig) -> Outcome {
    let given = text::normalize(text, config.case_sensitive());
    if given.is_empty() {
        return Outcome::Incorrect;
    }

    let mut closest: Option<usize> = None;
    for accepted in answers {
        let accepted = text::normalize(accepted, config.case_sensitive());
        if accepted == given {
            return Outcome::Correct;
        }

        let distance = text::levenshtein(&given, &accepted);
        let allowed = text::tolerance(accepted.chars().count(), config.max_edit_distance());
        if distance <= allowed && closest.is_none_or(|best| distance < best) {
            closest = Some(distance);
        }
    }

    match closest {
        Some(distance) => Outcome::CloseEnough { distance },
        None => Outcome::Incorrect,
    }
}
