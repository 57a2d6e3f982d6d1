//! Drawing the permutations of an attempt.

use indexmap::IndexMap;
use log::{debug, info, trace, warn};

use exam_layout_core::{
    identifier::QuestionId,
    layout::{IndexPair, Layout},
    version::Version,
};

use crate::random::SeededRandom;

/// Per-section question orders, keyed by section index.
pub(crate) type QuestionOrders = IndexMap<usize, Vec<usize>>;

/// Per-question choice orders, keyed by question id.
pub(crate) type ChoiceOrders = IndexMap<QuestionId, Vec<usize>>;

/// Generates the layout of one attempt.
///
/// Returns `None` when the version enables neither question nor choice
/// shuffling. Otherwise the layout records an order for every non-empty
/// section (if question shuffling is on) and a permutation for every
/// multiple-choice question with at least one choice (if choice shuffling is
/// on). The result depends only on the version's structure and `seed`.
///
/// # Examples
///
/// ```
/// use exam_layout::layout::generate_layout;
/// use exam_layout_core::version::Version;
///
/// let version = Version::default();
/// assert!(generate_layout(&version, 42).is_none());
/// ```
pub fn generate_layout(version: &Version, seed: u64) -> Option<Layout> {
    let options = version.options();
    if !options.shuffles() {
        debug!(version_id = version.id(); "Shuffling disabled, no layout generated");
        return None;
    }

    let mut rng = SeededRandom::new(seed);
    let (question_orders, choice_orders) = draw_orders(
        version,
        &mut rng,
        options.shuffle_questions,
        options.shuffle_choices,
    );

    let mut layout = Layout::new(seed);
    for (section_index, order) in question_orders {
        let pairs = order
            .into_iter()
            .enumerate()
            .map(|(shuffled_index, original_index)| IndexPair::new(original_index, shuffled_index))
            .collect();
        layout = layout.with_question_order(section_index, pairs);
    }
    for (question_id, order) in choice_orders {
        layout = layout.with_choice_order(question_id, order);
    }

    info!(
        version_id = version.id(),
        seed,
        sections = layout.shuffled_questions().map_or(0, IndexMap::len),
        questions = layout.shuffled_choices().map_or(0, IndexMap::len);
        "Layout generated"
    );

    Some(layout)
}

/// Draws every order from `rng`, in the fixed draw order.
///
/// Question orders come first, for every non-empty section in section order.
/// Choice orders follow, for every multiple-choice question with choices, in
/// canonical question order. Only the first question carrying a given id gets
/// a choice order. Each order lists, for display position `k`, the
/// original index shown there.
pub(crate) fn draw_orders(
    version: &Version,
    rng: &mut SeededRandom,
    shuffle_questions: bool,
    shuffle_choices: bool,
) -> (QuestionOrders, ChoiceOrders) {
    let mut question_orders = QuestionOrders::new();
    let mut choice_orders = ChoiceOrders::new();

    if shuffle_questions {
        for (section_index, section) in version.sections().iter().enumerate() {
            let count = section.questions().len();
            if count == 0 {
                debug!(section_index; "Skipping empty section");
                continue;
            }

            let order = rng.permutation(count);
            trace!(section_index, order:?; "Question order drawn");
            question_orders.insert(section_index, order);
        }
    }

    if shuffle_choices {
        for question in version.questions() {
            let Some(choices) = question.choices() else {
                continue;
            };
            if choices.is_empty() {
                debug!(question_id = question.id().as_str(); "Skipping question without choices");
                continue;
            }
            if choice_orders.contains_key(question.id()) {
                warn!(
                    question_id = question.id().as_str();
                    "Question id repeats, keeping choices of its first occurrence"
                );
                continue;
            }

            let order = rng.permutation(choices.len());
            trace!(question_id = question.id().as_str(), order:?; "Choice order drawn");
            choice_orders.insert(question.id().clone(), order);
        }
    }

    (question_orders, choice_orders)
}
