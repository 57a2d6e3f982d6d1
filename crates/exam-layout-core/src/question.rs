//! Question types.
//!
//! A [`Question`] carries the fields every question type shares and a
//! [`QuestionBody`] holding the type-specific content. The body is a tagged
//! union, so an MCQ answer key is always a choice index and a short-answer key
//! is always a list of accepted strings.
//!
//! On the wire the body is flattened into the question object and selected by
//! its `"type"` field:
//!
//! ```json
//! { "id": "q1", "prompt": "Capital of France?", "type": "mcq",
//!   "choices": ["Paris", "London", "Berlin"], "answer": 0 }
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::identifier::QuestionId;

/// A single question of a test version.
///
/// Questions are immutable once a version is published. The order of
/// [`QuestionBody::Mcq`] choices is significant because the answer key is an
/// index into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,

    #[serde(default)]
    prompt: String,

    #[serde(default = "default_points")]
    points: f32,

    #[serde(flatten)]
    body: QuestionBody,
}

fn default_points() -> f32 {
    1.0
}

impl Question {
    /// Creates a question worth one point.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, body: QuestionBody) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            points: default_points(),
            body,
        }
    }

    /// Set the points awarded for this question (builder style).
    pub fn with_points(mut self, points: f32) -> Self {
        self.points = points;
        self
    }

    /// Replace the body of this question (builder style).
    pub fn with_body(mut self, body: QuestionBody) -> Self {
        self.body = body;
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn points(&self) -> f32 {
        self.points
    }

    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    /// Returns the [`QuestionKind`] of this question's body.
    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Returns the choices if this is a multiple-choice question.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.body {
            QuestionBody::Mcq { choices, .. } => Some(choices),
            _ => None,
        }
    }
}

/// Type-specific content of a [`Question`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionBody {
    /// Multiple choice. `answer` indexes into `choices`.
    Mcq {
        #[serde(default)]
        choices: Vec<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        answer: Option<usize>,
    },

    /// Short free-text answer, graded against a list of accepted answers.
    Short {
        #[serde(default, alias = "answer", deserialize_with = "one_or_many")]
        answers: Vec<String>,
    },

    /// Recorded spoken response, reviewed by a teacher.
    Speaking,

    /// Long written response, reviewed by a teacher.
    Writing,

    /// Instructions shown to the student; not answerable.
    Instruction,

    /// Reading passage shared by the questions around it; not answerable.
    Passage,
}

impl QuestionBody {
    /// Creates a multiple-choice body.
    pub fn mcq<S: Into<String>>(
        choices: impl IntoIterator<Item = S>,
        answer: Option<usize>,
    ) -> Self {
        Self::Mcq {
            choices: choices.into_iter().map(Into::into).collect(),
            answer,
        }
    }

    /// Creates a short-answer body.
    pub fn short<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self::Short {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::Mcq { .. } => QuestionKind::Mcq,
            QuestionBody::Short { .. } => QuestionKind::Short,
            QuestionBody::Speaking => QuestionKind::Speaking,
            QuestionBody::Writing => QuestionKind::Writing,
            QuestionBody::Instruction => QuestionKind::Instruction,
            QuestionBody::Passage => QuestionKind::Passage,
        }
    }
}

/// The type of a question, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Mcq,
    Short,
    Speaking,
    Writing,
    Instruction,
    Passage,
}

impl QuestionKind {
    /// Returns `true` if responses to this kind need a teacher to score them.
    pub fn is_manually_reviewed(&self) -> bool {
        matches!(self, QuestionKind::Speaking | QuestionKind::Writing)
    }

    /// Returns `true` if this kind accepts a response at all.
    pub fn is_answerable(&self) -> bool {
        !matches!(self, QuestionKind::Instruction | QuestionKind::Passage)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKind::Mcq => "mcq",
            QuestionKind::Short => "short",
            QuestionKind::Speaking => "speaking",
            QuestionKind::Writing => "writing",
            QuestionKind::Instruction => "instruction",
            QuestionKind::Passage => "passage",
        };
        f.write_str(name)
    }
}

/// Accepts either a single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(answer) => vec![answer],
        OneOrMany::Many(answers) => answers,
    })
}
