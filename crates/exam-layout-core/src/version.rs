//! Test versions and their sections.
//!
//! A [`Version`] is the unit the layout engine consumes: an ordered list of
//! [`Section`]s plus the [`ExamOptions`] that decide whether anything is
//! shuffled at all.

use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Broad category of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Listening,
    Reading,
    Grammar,
    Vocabulary,
    Speaking,
    Writing,
    #[default]
    #[serde(other)]
    Mixed,
}

/// An ordered group of questions with its own time limit.
///
/// The stored order of questions is the canonical order, before any shuffling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    id: String,

    #[serde(default, rename = "type")]
    kind: SectionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_limit_minutes: Option<u32>,

    #[serde(default)]
    questions: Vec<Question>,
}

impl Section {
    /// Creates a section with no time limit.
    pub fn new(id: impl Into<String>, kind: SectionKind, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            kind,
            time_limit_minutes: None,
            questions,
        }
    }

    /// Set the time limit in minutes (builder style).
    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = Some(minutes);
        self
    }

    /// Returns a copy of this section holding `questions` instead of its own.
    pub fn with_questions(&self, questions: Vec<Question>) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            time_limit_minutes: self.time_limit_minutes,
            questions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Exam-wide options set by the test author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamOptions {
    /// Shuffle question order within each section.
    #[serde(default)]
    pub shuffle_questions: bool,

    /// Shuffle the choices of every multiple-choice question.
    #[serde(default)]
    pub shuffle_choices: bool,

    /// Show the score to the student once the attempt is submitted.
    #[serde(default)]
    pub show_results: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

impl ExamOptions {
    /// Returns `true` if either kind of shuffling is enabled.
    pub fn shuffles(&self) -> bool {
        self.shuffle_questions || self.shuffle_choices
    }
}

/// A published test version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default)]
    id: String,

    #[serde(default)]
    title: String,

    #[serde(default)]
    sections: Vec<Section>,

    #[serde(default, alias = "examOptions")]
    options: ExamOptions,
}

impl Version {
    /// Creates a version with default (non-shuffling) options.
    pub fn new(id: impl Into<String>, title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sections,
            options: ExamOptions::default(),
        }
    }

    /// Set the exam options (builder style).
    pub fn with_options(mut self, options: ExamOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns a copy of this version holding `sections` instead of its own.
    pub fn with_sections(&self, sections: Vec<Section>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            sections,
            options: self.options.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn options(&self) -> &ExamOptions {
        &self.options
    }

    /// Iterates over every question in canonical order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    /// Looks up a question by its identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id() == id)
    }
}
