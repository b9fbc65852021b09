//! Two-sum over an ascending sequence.
//!
//! Two cursors start at the ends of the sequence and converge. Because the
//! input is ascending, moving the left cursor up can only grow the pair sum
//! and moving the right cursor down can only shrink it, so one cursor move
//! per step explores every candidate pair without backtracking.
//!
//! Following the classic problem statement, indices in the result are
//! 1-based, and "no pair found" is signalled in-band by the sentinel
//! `(-1, -1)` rather than through `Option` or an error type.

/// Sentinel returned when no pair of values sums to the target.
pub const NOT_FOUND: (i64, i64) = (-1, -1);

/// 1-based index pair `(i, j)` with `i < j` and
/// `values[i - 1] + values[j - 1] == target`, or [`NOT_FOUND`].
///
/// `values` must be sorted ascending. When several pairs qualify, the first
/// one encountered by the converging cursors is returned, which makes the
/// result deterministic even among duplicates. Sequences shorter than two
/// elements cannot contain a pair and yield the sentinel.
///
/// ```
/// use two_pointers::two_sum_sorted;
///
/// assert_eq!(two_sum_sorted(&[2, 3, 4], 6), (1, 3));
/// assert_eq!(two_sum_sorted(&[1, 2, 3], 100), (-1, -1));
/// ```
pub fn two_sum_sorted(values: &[i64], target: i64) -> (i64, i64) {
    if values.is_empty() {
        return NOT_FOUND;
    }

    let mut i = 0;
    let mut j = values.len() - 1;

    while i < j {
        // Widened so the scan stays total over the full i64 domain.
        let sum = i128::from(values[i]) + i128::from(values[j]);
        match sum.cmp(&i128::from(target)) {
            std::cmp::Ordering::Equal => return (i as i64 + 1, j as i64 + 1),
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j -= 1,
        }
    }

    NOT_FOUND
}
