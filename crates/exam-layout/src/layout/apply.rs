//! Reordering a version by a stored layout.

use log::{debug, info, warn};

use exam_layout_core::{
    layout::{IndexPair, Layout, is_permutation},
    question::{Question, QuestionBody},
    version::Version,
};

/// Returns the display-order view of `version` under `layout`.
///
/// Sections keep their order. Within a section, the question originally at
/// `original_index` moves to `shuffled_index`; sections without a recorded
/// order keep their stored order. Every multiple-choice question with a
/// recorded permutation has its choices reordered and its answer index moved
/// to wherever the correct choice landed.
///
/// With no layout the version is returned unchanged. The input is never
/// mutated, and the same layout always produces the same view.
///
/// # Examples
///
/// ```
/// use exam_layout::layout::apply_layout;
/// use exam_layout_core::{
///     layout::Layout,
///     question::{Question, QuestionBody},
///     version::{Section, SectionKind, Version},
/// };
///
/// let body = QuestionBody::mcq(["Paris", "London", "Berlin"], Some(0));
/// let section = Section::new("s", SectionKind::Mixed, vec![Question::new("q1", "", body)]);
/// let version = Version::new("v", "", vec![section]);
/// let layout = Layout::new(0).with_choice_order("q1", vec![1, 2, 0]);
///
/// let view = apply_layout(&version, Some(&layout));
/// let shown = &view.sections()[0].questions()[0];
/// assert_eq!(shown.body(), &QuestionBody::mcq(["London", "Berlin", "Paris"], Some(2)));
/// ```
pub fn apply_layout(version: &Version, layout: Option<&Layout>) -> Version {
    let Some(layout) = layout else {
        debug!(version_id = version.id(); "No layout, keeping canonical order");
        return version.clone();
    };
    if layout.is_identity() {
        debug!(version_id = version.id(), seed = layout.seed(); "Layout records no permutation");
        return version.clone();
    }

    let sections = version
        .sections()
        .iter()
        .enumerate()
        .map(|(section_index, section)| {
            let questions = match layout.question_order(section_index) {
                Some(pairs) => place_questions(section.questions(), pairs, section_index),
                None => section.questions().iter().collect(),
            };

            let questions = questions
                .into_iter()
                .map(|question| match layout.choice_order(question.id().as_str()) {
                    Some(order) => reorder_choices(question, order),
                    None => question.clone(),
                })
                .collect();

            section.with_questions(questions)
        })
        .collect();

    info!(version_id = version.id(), seed = layout.seed(); "Layout applied");
    version.with_sections(sections)
}

/// Places each question at its recorded shuffled index.
///
/// Pairs pointing outside the section are skipped and positions left unfilled
/// are dropped, so a damaged order loses questions rather than panicking.
fn place_questions<'a>(
    questions: &'a [Question],
    pairs: &[IndexPair],
    section_index: usize,
) -> Vec<&'a Question> {
    let mut slots: Vec<Option<&Question>> = vec![None; questions.len()];

    for pair in pairs {
        match (questions.get(pair.original_index), slots.get_mut(pair.shuffled_index)) {
            (Some(question), Some(slot)) => *slot = Some(question),
            _ => warn!(
                section_index,
                original_index = pair.original_index,
                shuffled_index = pair.shuffled_index;
                "Question order entry out of range, skipped"
            ),
        }
    }

    let placed: Vec<&Question> = slots.into_iter().flatten().collect();
    if placed.len() != questions.len() {
        warn!(
            section_index,
            expected = questions.len(),
            placed = placed.len();
            "Question order left gaps, unfilled positions dropped"
        );
    }
    placed
}

/// Reorders the choices of a multiple-choice question.
///
/// Display position `k` shows the original choice at `order[k]`. The answer
/// key becomes the position of the original answer within `order`; if it
/// cannot be found there it keeps its original value. Anything other than a
/// multiple-choice question, or an order that is not a permutation of its
/// choices, passes through unchanged.
pub(crate) fn reorder_choices(question: &Question, order: &[usize]) -> Question {
    let QuestionBody::Mcq { choices, answer } = question.body() else {
        return question.clone();
    };

    if !is_permutation(order, choices.len()) {
        warn!(
            question_id = question.id().as_str(),
            choice_count = choices.len(),
            order:?;
            "Choice order is not a permutation, keeping canonical order"
        );
        return question.clone();
    }

    let choices: Vec<String> = order.iter().map(|&index| choices[index].clone()).collect();
    let answer = answer.map(|original| {
        order
            .iter()
            .position(|&index| index == original)
            .unwrap_or_else(|| {
                warn!(
                    question_id = question.id().as_str(),
                    answer = original;
                    "Answer index not found in choice order, keeping original"
                );
                original
            })
    });

    question.clone().with_body(QuestionBody::Mcq { choices, answer })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Choice count, answer index, and a permutation over those choices.
    fn mcq_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
        (1usize..12).prop_flat_map(|len| {
            (
                Just(len),
                0..len,
                Just((0..len).collect::<Vec<_>>()).prop_shuffle(),
            )
        })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The choice under the rewritten answer is the originally correct choice.
    fn check_answer_integrity(
        len: usize,
        answer: usize,
        order: Vec<usize>,
    ) -> Result<(), TestCaseError> {
        let choices: Vec<String> = (0..len).map(|i| format!("choice {i}")).collect();
        let question = Question::new("q", "", QuestionBody::mcq(choices.clone(), Some(answer)));

        let reordered = reorder_choices(&question, &order);
        let QuestionBody::Mcq {
            choices: shown,
            answer: Some(shown_answer),
        } = reordered.body()
        else {
            return Err(TestCaseError::fail("answer key lost"));
        };

        prop_assert_eq!(&shown[*shown_answer], &choices[answer]);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn answer_integrity((len, answer, order) in mcq_strategy()) {
            check_answer_integrity(len, answer, order)?;
        }
    }
}
