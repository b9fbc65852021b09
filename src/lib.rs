//! Two-pointer scans
//!
//! This crate collects constant-space solutions to classic array-scanning
//! problems, each built on the *two-pointer technique*: two independently
//! moving cursors over an ordered sequence, achieving linear time without
//! nested iteration and without auxiliary tables.
//!
//! ## Core idea
//! 1. Place one cursor at each end of the sequence.
//! 2. At every step, a comparison at the two cursor positions decides which
//!    cursor moves, and guarantees the move cannot skip a candidate answer.
//! 3. The cursors meet after at most `n` moves, so each scan is O(n) time
//!    and O(1) auxiliary space.
//!
//! ## Quick start
//! ```
//! use two_pointers::{trapped_rainwater, two_sum_sorted};
//!
//! assert_eq!(trapped_rainwater(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
//! assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), (1, 2));
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains the individual scans:
//! - Trapping rain water over a histogram of bar heights
//! - Two-sum over an ascending sequence
//!
//! Every function is pure and side-effect-free: identical inputs always
//! yield identical outputs, and concurrent callers need no synchronisation.

pub mod problems;

pub use crate::problems::rain_water::trapped_rainwater;
pub use crate::problems::two_sum::two_sum_sorted;
