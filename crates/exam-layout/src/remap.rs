//! Mapping between display order and canonical order.
//!
//! Students answer in the order their layout produced. Grading and review work
//! in the stored order of the version. The functions here translate positions
//! between the two using the attempt's [`Layout`]. Where the layout records
//! nothing for a section or question, that element was not shuffled and the
//! index passes through unchanged.

use log::{debug, warn};

use exam_layout_core::{
    layout::{Layout, is_permutation},
    response::{Response, ResponseOrder, Responses},
};

/// Returns the canonical index of the question shown at `display_index`.
pub fn canonical_question_index(
    layout: &Layout,
    section_index: usize,
    display_index: usize,
) -> usize {
    layout
        .question_order(section_index)
        .and_then(|pairs| pairs.iter().find(|pair| pair.shuffled_index == display_index))
        .map_or(display_index, |pair| pair.original_index)
}

/// Returns the display position of the question stored at `original_index`.
pub fn display_question_index(
    layout: &Layout,
    section_index: usize,
    original_index: usize,
) -> usize {
    layout
        .question_order(section_index)
        .and_then(|pairs| pairs.iter().find(|pair| pair.original_index == original_index))
        .map_or(original_index, |pair| pair.shuffled_index)
}

/// Returns the canonical index of the choice shown at `display_position`.
pub fn canonical_choice(layout: &Layout, question_id: &str, display_position: usize) -> usize {
    choice_order(layout, question_id)
        .and_then(|order| order.get(display_position).copied())
        .unwrap_or(display_position)
}

/// Returns the display position of the choice stored at `canonical_index`.
pub fn display_choice(layout: &Layout, question_id: &str, canonical_index: usize) -> usize {
    choice_order(layout, question_id)
        .and_then(|order| order.iter().position(|&index| index == canonical_index))
        .unwrap_or(canonical_index)
}

/// Returns the recorded choice order of a question if it can be displayed.
///
/// An order that is not a permutation is shown in canonical order, so it maps
/// positions as the identity.
fn choice_order<'a>(layout: &'a Layout, question_id: &str) -> Option<&'a [usize]> {
    let order = layout.choice_order(question_id)?;
    if !is_permutation(order, order.len()) {
        warn!(question_id, order:?; "Choice order is not a permutation, mapping as identity");
        return None;
    }
    Some(order)
}

/// Converts a response sheet to canonical choice indices.
///
/// Display-order choice positions are mapped through the layout's choice
/// permutations. Text and recording responses pass through. A sheet that is
/// already canonical, or an attempt without a layout, is only relabelled.
pub fn remap_responses(layout: Option<&Layout>, responses: Responses) -> Responses {
    if responses.order() == ResponseOrder::Canonical {
        return responses;
    }

    let Some(layout) = layout else {
        debug!("No layout, display order is canonical order");
        return responses.map_into(ResponseOrder::Canonical, |_, response| response);
    };

    responses.map_into(ResponseOrder::Canonical, |question_id, response| match response {
        Response::Choice(position) => {
            let out_of_range = choice_order(layout, question_id.as_str())
                .is_some_and(|order| position >= order.len());
            if out_of_range {
                warn!(
                    question_id = question_id.as_str(),
                    position;
                    "Choice position out of range, keeping it as given"
                );
            }
            Response::Choice(canonical_choice(layout, question_id.as_str(), position))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use exam_layout_core::layout::IndexPair;

    use super::*;

    fn layout() -> Layout {
        Layout::new(12345)
            .with_question_order(
                0,
                vec![
                    IndexPair::new(3, 0),
                    IndexPair::new(2, 1),
                    IndexPair::new(0, 2),
                    IndexPair::new(1, 3),
                ],
            )
            .with_choice_order("capital", vec![1, 2, 0])
    }

    #[test]
    fn test_question_index_both_ways() {
        let layout = layout();
        assert_eq!(canonical_question_index(&layout, 0, 0), 3);
        assert_eq!(canonical_question_index(&layout, 0, 3), 1);
        assert_eq!(display_question_index(&layout, 0, 3), 0);
        assert_eq!(display_question_index(&layout, 0, 1), 3);
    }

    #[test]
    fn test_unshuffled_section_is_identity() {
        let layout = layout();
        assert_eq!(canonical_question_index(&layout, 4, 2), 2);
        assert_eq!(display_question_index(&layout, 4, 2), 2);
    }

    #[test]
    fn test_choice_both_ways() {
        let layout = layout();
        // Display shows London, Berlin, Paris.
        assert_eq!(canonical_choice(&layout, "capital", 2), 0);
        assert_eq!(display_choice(&layout, "capital", 0), 2);
        assert_eq!(canonical_choice(&layout, "other", 2), 2);
        assert_eq!(display_choice(&layout, "other", 1), 1);
    }

    #[test]
    fn test_out_of_range_position_passes_through() {
        assert_eq!(canonical_choice(&layout(), "capital", 9), 9);
    }

    #[test]
    fn test_broken_choice_order_maps_as_identity() {
        let layout = Layout::new(0).with_choice_order("q", vec![1, 1, 0]);

        assert_eq!(canonical_choice(&layout, "q", 0), 0);
        assert_eq!(canonical_choice(&layout, "q", 2), 2);
        assert_eq!(display_choice(&layout, "q", 1), 1);

        let sheet = Responses::new(ResponseOrder::Display).with("q", Response::Choice(0));
        let canonical = remap_responses(Some(&layout), sheet);
        assert_eq!(canonical.get("q"), Some(&Response::Choice(0)));
    }

    #[test]
    fn test_remap_display_sheet() {
        let sheet = Responses::new(ResponseOrder::Display)
            .with("capital", Response::Choice(2))
            .with("essay", Response::Text("My town is small.".to_string()));

        let canonical = remap_responses(Some(&layout()), sheet);
        assert_eq!(canonical.order(), ResponseOrder::Canonical);
        assert_eq!(canonical.get("capital"), Some(&Response::Choice(0)));
        assert_eq!(
            canonical.get("essay"),
            Some(&Response::Text("My town is small.".to_string()))
        );
    }

    #[test]
    fn test_canonical_sheet_is_untouched() {
        let sheet = Responses::new(ResponseOrder::Canonical).with("capital", Response::Choice(2));
        let remapped = remap_responses(Some(&layout()), sheet.clone());
        assert_eq!(remapped, sheet);
    }

    #[test]
    fn test_no_layout_only_relabels() {
        let sheet = Responses::new(ResponseOrder::Display).with("capital", Response::Choice(2));
        let remapped = remap_responses(None, sheet);

        assert_eq!(remapped.order(), ResponseOrder::Canonical);
        assert_eq!(remapped.get("capital"), Some(&Response::Choice(2)));
    }
}
