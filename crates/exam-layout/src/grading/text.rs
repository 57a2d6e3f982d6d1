//! Text comparison for short answers.

/// Normalize text for comparison: trim, collapse whitespace, and lowercase
/// unless `case_sensitive`.
pub fn normalize(text: &str, case_sensitive: bool) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

/// Levenshtein edit distance between two strings, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &a_char) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Typo tolerance for an accepted answer of `len` chars, capped at `max`.
///
/// One or two chars must match exactly, three or four allow one edit, longer
/// answers allow two.
pub fn tolerance(len: usize, max: usize) -> usize {
    let tier = match len {
        0..=2 => 0,
        3..=4 => 1,
        _ => 2,
    };
    tier.min(max)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Property Test Functions
    // ===================

    /// Distance is symmetric and zero exactly for equal strings.
    fn check_distance_symmetric(a: String, b: String) -> Result<(), TestCaseError> {
        let ab = levenshtein(&a, &b);
        prop_assert_eq!(ab, levenshtein(&b, &a));
        prop_assert_eq!(ab == 0, a == b);
        Ok(())
    }

    /// Distance never exceeds the longer string's length.
    fn check_distance_bounded(a: String, b: String) -> Result<(), TestCaseError> {
        let bound = a.chars().count().max(b.chars().count());
        prop_assert!(levenshtein(&a, &b) <= bound);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn distance_symmetric(a in "[a-z ]{0,12}", b in "[a-z ]{0,12}") {
            check_distance_symmetric(a, b)?;
        }

        #[test]
        fn distance_bounded(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            check_distance_bounded(a, b)?;
        }
    }
}
