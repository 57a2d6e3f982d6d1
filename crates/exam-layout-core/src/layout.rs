//! The persisted shuffle record of one attempt.
//!
//! A [`Layout`] is produced once, when an attempt starts, and stored with the
//! attempt record. It is read back every time the attempt is rendered, resumed,
//! or graded, and is never mutated.
//!
//! # Shape
//!
//! - `seed` - the seed the permutations were drawn from
//! - `shuffledQuestions` - per section index, one [`IndexPair`] per question
//! - `shuffledChoices` - per MCQ question id, a permutation where display
//!   position `k` shows the original choice at `permutation[k]`
//!
//! Either map is omitted when its option was disabled or produced no entries.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::LayoutError, identifier::QuestionId, question::QuestionBody, version::Version};

/// Where one question moved to within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPair {
    pub original_index: usize,
    pub shuffled_index: usize,
}

impl IndexPair {
    pub fn new(original_index: usize, shuffled_index: usize) -> Self {
        Self {
            original_index,
            shuffled_index,
        }
    }
}

/// Shuffle record of a single attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    seed: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    shuffled_questions: Option<IndexMap<usize, Vec<IndexPair>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    shuffled_choices: Option<IndexMap<QuestionId, Vec<usize>>>,
}

impl Layout {
    /// Creates a layout that shuffles nothing.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            shuffled_questions: None,
            shuffled_choices: None,
        }
    }

    /// Record the question order of one section (builder style).
    pub fn with_question_order(mut self, section_index: usize, pairs: Vec<IndexPair>) -> Self {
        self.shuffled_questions
            .get_or_insert_with(IndexMap::new)
            .insert(section_index, pairs);
        self
    }

    /// Record the choice permutation of one question (builder style).
    pub fn with_choice_order(
        mut self,
        question_id: impl Into<QuestionId>,
        order: Vec<usize>,
    ) -> Self {
        self.shuffled_choices
            .get_or_insert_with(IndexMap::new)
            .insert(question_id.into(), order);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffled_questions(&self) -> Option<&IndexMap<usize, Vec<IndexPair>>> {
        self.shuffled_questions.as_ref()
    }

    pub fn shuffled_choices(&self) -> Option<&IndexMap<QuestionId, Vec<usize>>> {
        self.shuffled_choices.as_ref()
    }

    /// Returns the recorded question order of a section, if any.
    pub fn question_order(&self, section_index: usize) -> Option<&[IndexPair]> {
        self.shuffled_questions
            .as_ref()?
            .get(&section_index)
            .map(Vec::as_slice)
    }

    /// Returns the recorded choice permutation of a question, if any.
    pub fn choice_order(&self, question_id: &str) -> Option<&[usize]> {
        self.shuffled_choices
            .as_ref()?
            .get(question_id)
            .map(Vec::as_slice)
    }

    /// Returns `true` if the layout records no permutation at all.
    pub fn is_identity(&self) -> bool {
        self.shuffled_questions.as_ref().is_none_or(IndexMap::is_empty)
            && self.shuffled_choices.as_ref().is_none_or(IndexMap::is_empty)
    }

    /// Check that this layout fits `version`.
    ///
    /// Every ordered section must exist and be ordered by a bijection over its
    /// questions, and every choice permutation must belong to a multiple-choice
    /// question and be a bijection over its choices.
    ///
    /// # Errors
    ///
    /// Returns the first [`LayoutError`] found.
    pub fn validate(&self, version: &Version) -> Result<(), LayoutError> {
        let sections = version.sections();

        for (&section_index, pairs) in self.shuffled_questions.iter().flatten() {
            let section = sections
                .get(section_index)
                .ok_or(LayoutError::UnknownSection {
                    section_index,
                    section_count: sections.len(),
                })?;

            let expected = section.questions().len();
            if pairs.len() != expected {
                return Err(LayoutError::SectionSizeMismatch {
                    section_index,
                    expected,
                    found: pairs.len(),
                });
            }

            let originals: Vec<usize> = pairs.iter().map(|pair| pair.original_index).collect();
            let shuffled: Vec<usize> = pairs.iter().map(|pair| pair.shuffled_index).collect();
            if !is_permutation(&originals, expected) || !is_permutation(&shuffled, expected) {
                return Err(LayoutError::InvalidQuestionOrder { section_index });
            }
        }

        for (question_id, order) in self.shuffled_choices.iter().flatten() {
            let question = version
                .question(question_id.as_str())
                .ok_or_else(|| LayoutError::UnknownQuestion(question_id.clone()))?;

            let QuestionBody::Mcq { choices, .. } = question.body() else {
                return Err(LayoutError::NotMultipleChoice(question_id.clone()));
            };

            if !is_permutation(order, choices.len()) {
                return Err(LayoutError::InvalidChoiceOrder {
                    question_id: question_id.clone(),
                    choice_count: choices.len(),
                });
            }
        }

        debug!(seed = self.seed; "Layout validated");
        Ok(())
    }
}

/// Returns `true` if `order` holds every index of `[0, len)` exactly once.
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }

    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        question::Question,
        version::{Section, SectionKind},
    };

    fn sample_version() -> Version {
        Version::new(
            "v1",
            "Placement",
            vec![Section::new(
                "grammar",
                SectionKind::Grammar,
                vec![
                    Question::new("q1", "", QuestionBody::mcq(["a", "b", "c"], Some(1))),
                    Question::new("q2", "", QuestionBody::short(["went"])),
                    Question::new("q3", "", QuestionBody::Writing),
                ],
            )],
        )
    }

    fn identity_pairs(len: usize) -> Vec<IndexPair> {
        (0..len).map(|i| IndexPair::new(i, i)).collect()
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }

    #[test]
    fn test_valid_layout() {
        let layout = Layout::new(7)
            .with_question_order(
                0,
                vec![
                    IndexPair::new(2, 0),
                    IndexPair::new(0, 1),
                    IndexPair::new(1, 2),
                ],
            )
            .with_choice_order("q1", vec![2, 0, 1]);

        assert_eq!(layout.validate(&sample_version()), Ok(()));
        assert!(!layout.is_identity());
    }

    #[test]
    fn test_unknown_section() {
        let layout = Layout::new(7).with_question_order(3, identity_pairs(3));

        assert_eq!(
            layout.validate(&sample_version()),
            Err(LayoutError::UnknownSection {
                section_index: 3,
                section_count: 1,
            })
        );
    }

    #[test]
    fn test_section_size_mismatch() {
        let layout = Layout::new(7).with_question_order(0, identity_pairs(2));

        assert_eq!(
            layout.validate(&sample_version()),
            Err(LayoutError::SectionSizeMismatch {
                section_index: 0,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_duplicate_shuffled_index() {
        let pairs = vec![
            IndexPair::new(0, 0),
            IndexPair::new(1, 0),
            IndexPair::new(2, 2),
        ];
        let layout = Layout::new(7).with_question_order(0, pairs);

        assert_eq!(
            layout.validate(&sample_version()),
            Err(LayoutError::InvalidQuestionOrder { section_index: 0 })
        );
    }

    #[test]
    fn test_choice_order_errors() {
        let version = sample_version();

        let unknown = Layout::new(7).with_choice_order("nope", vec![0]);
        assert_eq!(
            unknown.validate(&version),
            Err(LayoutError::UnknownQuestion(QuestionId::new("nope")))
        );

        let not_mcq = Layout::new(7).with_choice_order("q2", vec![0]);
        assert_eq!(
            not_mcq.validate(&version),
            Err(LayoutError::NotMultipleChoice(QuestionId::new("q2")))
        );

        let short_order = Layout::new(7).with_choice_order("q1", vec![1, 0]);
        assert_eq!(
            short_order.validate(&version),
            Err(LayoutError::InvalidChoiceOrder {
                question_id: QuestionId::new("q1"),
                choice_count: 3,
            })
        );
    }

    #[test]
    fn test_lookups() {
        let layout = Layout::new(1)
            .with_question_order(0, identity_pairs(3))
            .with_choice_order("q1", vec![1, 2, 0]);

        assert_eq!(layout.question_order(0).map(<[IndexPair]>::len), Some(3));
        assert!(layout.question_order(1).is_none());
        assert_eq!(layout.choice_order("q1"), Some(&[1, 2, 0][..]));
        assert!(layout.choice_order("q2").is_none());
    }

    #[test]
    fn test_empty_layout_is_identity() {
        assert!(Layout::new(0).is_identity());
    }

    #[test]
    fn test_serialized_shape() {
        let layout = Layout::new(1730)
            .with_question_order(0, vec![IndexPair::new(1, 0), IndexPair::new(0, 1)])
            .with_choice_order("q1", vec![2, 0, 1]);

        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["seed"], 1730);
        assert_eq!(json["shuffledQuestions"]["0"][0]["originalIndex"], 1);
        assert_eq!(json["shuffledQuestions"]["0"][0]["shuffledIndex"], 0);
        assert_eq!(json["shuffledChoices"]["q1"][0], 2);

        let back: Layout = serde_json::from_value(json).unwrap();
        assert_eq!(back, layout);
    }

    #[test]
    fn test_absent_maps_are_omitted() {
        let json = serde_json::to_string(&Layout::new(5)).unwrap();
        assert_eq!(json, r#"{"seed":5}"#);
    }
}
