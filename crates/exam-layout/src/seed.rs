//! Seed derivation for attempts.

/// Derives the layout seed of an attempt.
///
/// Sums the UTF-16 code units of `attempt_id` followed by `participant_id`.
/// The sum is not collision free. Attempts that share a seed share a shuffle.
///
/// # Examples
///
/// ```
/// use exam_layout::seed::derive_seed;
///
/// assert_eq!(derive_seed("attempt-1", "student-1"), 1730);
/// ```
pub fn derive_seed(attempt_id: &str, participant_id: &str) -> u64 {
    attempt_id
        .encode_utf16()
        .chain(participant_id.encode_utf16())
        .map(u64::from)
        .sum()
}
