use proptest::prelude::*;
use two_pointers::trapped_rainwater;

/// Textbook O(n)-space formulation: water above bar `k` is
/// `min(max(h[..=k]), max(h[k..])) - h[k]`.
fn prefix_suffix_reference(heights: &[u32]) -> u64 {
    let n = heights.len();
    if n == 0 {
        return 0;
    }
    let mut left_max = vec![0u32; n];
    let mut right_max = vec![0u32; n];
    left_max[0] = heights[0];
    for k in 1..n {
        left_max[k] = left_max[k - 1].max(heights[k]);
    }
    right_max[n - 1] = heights[n - 1];
    for k in (0..n - 1).rev() {
        right_max[k] = right_max[k + 1].max(heights[k]);
    }
    (0..n)
        .map(|k| u64::from(left_max[k].min(right_max[k]) - heights[k]))
        .sum()
}

proptest! {
    #[test]
    fn matches_prefix_suffix_reference(heights in prop::collection::vec(0u32..1_000, 0..200)) {
        prop_assert_eq!(trapped_rainwater(&heights), prefix_suffix_reference(&heights));
    }

    #[test]
    fn monotone_skylines_trap_nothing(mut heights in prop::collection::vec(0u32..1_000, 0..100)) {
        heights.sort_unstable();
        prop_assert_eq!(trapped_rainwater(&heights), 0);
        heights.reverse();
        prop_assert_eq!(trapped_rainwater(&heights), 0);
    }

    #[test]
    fn bounded_by_tallest_wall(heights in prop::collection::vec(0u32..1_000, 0..100)) {
        let tallest = u64::from(heights.iter().copied().max().unwrap_or(0));
        let bound = tallest * heights.len() as u64;
        prop_assert!(trapped_rainwater(&heights) <= bound);
    }

    #[test]
    fn outer_zero_bars_hold_no_water(heights in prop::collection::vec(0u32..1_000, 0..100)) {
        // A zero-height bar outside the histogram is not a wall.
        let mut padded = Vec::with_capacity(heights.len() + 2);
        padded.push(0);
        padded.extend_from_slice(&heights);
        padded.push(0);
        prop_assert_eq!(trapped_rainwater(&padded), trapped_rainwater(&heights));
    }

    #[test]
    fn pure_and_repeatable(heights in prop::collection::vec(0u32..1_000, 0..100)) {
        prop_assert_eq!(trapped_rainwater(&heights), trapped_rainwater(&heights));
    }
}

#[cfg(feature = "heavy")]
#[test]
fn heavy_comb_closed_form() {
    // Alternating wall/valley comb: every valley fills to the wall height.
    let wall = 100u32;
    let valleys = 500_000usize;
    let mut heights = Vec::with_capacity(2 * valleys + 1);
    heights.push(wall);
    for _ in 0..valleys {
        heights.push(0);
        heights.push(wall);
    }
    assert_eq!(
        trapped_rainwater(&heights),
        valleys as u64 * u64::from(wall)
    );
}
