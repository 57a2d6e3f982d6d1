//! Student responses.
//!
//! A [`Responses`] sheet maps question ids to what the student submitted.
//! Choice responses are positions, so the sheet records whether those
//! positions refer to the display order of an attempt or to the canonical
//! order of the version.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::identifier::QuestionId;

/// What the student submitted for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    /// Position of the selected choice.
    Choice(usize),
    /// Free text.
    Text(String),
    /// URI of a recorded spoken answer.
    Recording(String),
}

/// Which choice order the positions in a [`Responses`] sheet refer to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOrder {
    /// Positions as shown to the student after the layout was applied.
    #[default]
    Display,
    /// Positions in the stored order of the version.
    Canonical,
}

/// All responses of one attempt, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responses {
    #[serde(default)]
    order: ResponseOrder,

    #[serde(default)]
    answers: IndexMap<QuestionId, Response>,
}

impl Responses {
    /// Creates an empty sheet whose choice positions use `order`.
    pub fn new(order: ResponseOrder) -> Self {
        Self {
            order,
            answers: IndexMap::new(),
        }
    }

    /// Record a response (builder style).
    pub fn with(mut self, question_id: impl Into<QuestionId>, response: Response) -> Self {
        self.insert(question_id, response);
        self
    }

    /// Record a response, replacing any earlier one for the same question.
    pub fn insert(&mut self, question_id: impl Into<QuestionId>, response: Response) {
        self.answers.insert(question_id.into(), response);
    }

    pub fn order(&self) -> ResponseOrder {
        self.order
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.answers.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Response)> {
        self.answers.iter()
    }

    /// Rebuilds the sheet in `order`, passing every response through `map`.
    pub fn map_into<F>(self, order: ResponseOrder, mut map: F) -> Self
    where
        F: FnMut(&QuestionId, Response) -> Response,
    {
        let answers = self
            .answers
            .into_iter()
            .map(|(question_id, response)| {
                let response = map(&question_id, response);
                (question_id, response)
            })
            .collect();
        Self { order, answers }
    }
}
