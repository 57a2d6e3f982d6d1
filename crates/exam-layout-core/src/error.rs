//! Validation errors for persisted layouts.

use thiserror::Error;

use crate::identifier::QuestionId;

/// A [`Layout`](crate::layout::Layout) that does not fit the version it is
/// checked against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout orders section {section_index}, but the version has {section_count} sections")]
    UnknownSection {
        section_index: usize,
        section_count: usize,
    },

    #[error("section {section_index} has {expected} questions, but the layout orders {found}")]
    SectionSizeMismatch {
        section_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("question order of section {section_index} is not a permutation")]
    InvalidQuestionOrder { section_index: usize },

    #[error("layout shuffles choices of unknown question `{0}`")]
    UnknownQuestion(QuestionId),

    #[error("layout shuffles choices of `{0}`, which is not a multiple-choice question")]
    NotMultipleChoice(QuestionId),

    #[error("choice order of `{question_id}` is not a permutation of its {choice_count} choices")]
    InvalidChoiceOrder {
        question_id: QuestionId,
        choice_count: usize,
    },
}
