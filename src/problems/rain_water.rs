//! Trapped rainwater over a histogram of bar heights.
//!
//! Given bar heights of unit width, water pools above each bar up to the
//! shorter of the tallest walls on its left and right. The textbook
//! formulation precomputes prefix and suffix maxima in two O(n) arrays; this
//! implementation instead sweeps two cursors inward from the ends and keeps
//! only the running maximum behind each cursor.
//!
//! The comparison `heights[left] <= heights[right]` is what makes the local
//! maxima sufficient: the side being advanced is never taller than the bar
//! under the opposite cursor, so the opposite side is guaranteed to hold a
//! wall at least as tall as this side's running maximum. The water level at
//! the advanced position is therefore pinned by that running maximum alone.

/// Total volume of water trapped between bars after rain.
///
/// Heights are non-negative by type; the total is accumulated in `u64`, so
/// every `&[u32]` input has a well-defined result with no overflow.
///
/// Degenerate inputs trap nothing: the empty histogram, a single bar, two
/// bars, and any strictly monotone skyline all return 0.
///
/// ```
/// use two_pointers::trapped_rainwater;
///
/// assert_eq!(trapped_rainwater(&[4, 2, 0, 3, 2, 5]), 9);
/// assert_eq!(trapped_rainwater(&[3, 2, 1]), 0);
/// ```
pub fn trapped_rainwater(heights: &[u32]) -> u64 {
    let n = heights.len();
    if n == 0 {
        return 0;
    }

    let mut left = 0;
    let mut right = n - 1;
    let mut left_max = heights[left];
    let mut right_max = heights[right];
    let mut trapped: u64 = 0;

    while left < right {
        // Advance the side whose bar is not the taller one; the opposite
        // side then holds a wall at least as tall as this side's maximum.
        if heights[left] <= heights[right] {
            if heights[left] < left_max {
                trapped += u64::from(left_max - heights[left]);
            } else {
                left_max = heights[left];
            }
            left += 1;
        } else {
            if heights[right] < right_max {
                trapped += u64::from(right_max - heights[right]);
            } else {
                right_max = heights[right];
            }
            right -= 1;
        }
    }

    trapped
}
