//! Authoring-time preview of a shuffled exam.
//!
//! A preview shows authors roughly what students will see without creating an
//! attempt. It draws from a fixed, well-known seed, so it is stable between
//! calls but says nothing about the shuffle any real attempt will get. Preview
//! output must never be stored in place of an attempt's layout.

use log::info;

use exam_layout_core::version::Version;

use super::{apply::reorder_choices, generate::draw_orders};
use crate::random::SeededRandom;

/// Seed used by [`generate_preview`] unless configured otherwise.
pub const PREVIEW_SEED: u64 = 12345;

/// Returns the shuffled view of `version` drawn from `seed`.
///
/// Shuffles according to the version's exam options in a single pass, using
/// the same draw order as layout generation, without producing a
/// [`Layout`](exam_layout_core::layout::Layout). The result equals generating
/// a layout with `seed` and applying it straight away.
pub fn generate_preview(version: &Version, seed: u64) -> Version {
    let options = version.options();
    if !options.shuffles() {
        return version.clone();
    }

    let mut rng = SeededRandom::new(seed);
    let (question_orders, choice_orders) = draw_orders(
        version,
        &mut rng,
        options.shuffle_questions,
        options.shuffle_choices,
    );

    let sections = version
        .sections()
        .iter()
        .enumerate()
        .map(|(section_index, section)| {
            let canonical = section.questions();
            let ordered: Vec<_> = match question_orders.get(&section_index) {
                Some(order) => order.iter().map(|&original| &canonical[original]).collect(),
                None => canonical.iter().collect(),
            };

            let questions = ordered
                .into_iter()
                .map(|question| match choice_orders.get(question.id()) {
                    Some(order) => reorder_choices(question, order),
                    None => question.clone(),
                })
                .collect();

            section.with_questions(questions)
        })
        .collect();

    info!(version_id = version.id(), seed; "Preview generated");
    version.with_sections(sections)
}

#[cfg(test)]
mod tests {
    use exam_layout_core::{
        question::{Question, QuestionBody},
        version::{ExamOptions, Section, SectionKind},
    };

    use super::*;
    use crate::layout::{apply_layout, generate_layout};

    fn version(options: ExamOptions) -> Version {
        Version::new(
            "v",
            "",
            vec![
                Section::new(
                    "grammar",
                    SectionKind::Grammar,
                    vec![
                        Question::new("q0", "", QuestionBody::mcq(["a", "b", "c"], Some(0))),
                        Question::new("q1", "", QuestionBody::short(["went"])),
                        Question::new("q2", "", QuestionBody::mcq(["a", "b", "c", "d"], Some(3))),
                        Question::new("q3", "", QuestionBody::Writing),
                    ],
                ),
                Section::new(
                    "listening",
                    SectionKind::Listening,
                    vec![
                        Question::new("q4", "", QuestionBody::mcq(["yes", "no"], Some(1))),
                        Question::new("q5", "", QuestionBody::Speaking),
                    ],
                ),
            ],
        )
        .with_options(options)
    }

    fn both() -> ExamOptions {
        ExamOptions {
            shuffle_questions: true,
            shuffle_choices: true,
            ..ExamOptions::default()
        }
    }

    #[test]
    fn test_preview_is_stable() {
        let version = version(both());
        assert_eq!(
            generate_preview(&version, PREVIEW_SEED),
            generate_preview(&version, PREVIEW_SEED)
        );
    }

    #[test]
    fn test_preview_matches_generate_then_apply() {
        let version = version(both());
        let layout = generate_layout(&version, PREVIEW_SEED);

        assert_eq!(
            generate_preview(&version, PREVIEW_SEED),
            apply_layout(&version, layout.as_ref())
        );
    }

    #[test]
    fn test_preview_pinned_order() {
        let preview = generate_preview(&version(both()), PREVIEW_SEED);
        let ids: Vec<&str> = preview.sections()[0]
            .questions()
            .iter()
            .map(|question| question.id().as_str())
            .collect();

        assert_eq!(ids, vec!["q3", "q2", "q0", "q1"]);
    }

    #[test]
    fn test_preview_differs_from_other_seed() {
        let version = version(both());
        assert_ne!(
            generate_preview(&version, PREVIEW_SEED),
            apply_layout(&version, generate_layout(&version, 1730).as_ref())
        );
    }

    #[test]
    fn test_preview_without_shuffling_is_identity() {
        let version = version(ExamOptions::default());
        assert_eq!(generate_preview(&version, PREVIEW_SEED), version);
    }
}
