//! Example: two-sum over an ascending sequence.
//!
//! Run with:
//! `cargo run --example two_sum`

use two_pointers::two_sum_sorted;

fn main() {
    let values: &[i64] = &[2, 7, 11, 15];
    let target = 9;

    match two_sum_sorted(values, target) {
        (-1, -1) => println!("No pair in {values:?} sums to {target}"),
        (i, j) => println!("{values:?}: values at positions {i} and {j} sum to {target}"),
    }
}
