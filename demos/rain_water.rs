//! Example: trapped rainwater over a small skyline.
//!
//! Run with:
//! `cargo run --example rain_water`

use two_pointers::trapped_rainwater;

fn main() {
    let skyline: &[u32] = &[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];

    let volume = trapped_rainwater(skyline);

    println!("Skyline: {skyline:?}");
    println!("Trapped water: {volume} units");
}
