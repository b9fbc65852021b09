//! The problem catalogue.
//!
//! Each module is self-contained: one scan, no shared state, no I/O.
//!
//! - [`rain_water`] : trapped rainwater over a histogram (outside-in sweep).
//! - [`two_sum`]    : index pair summing to a target in an ascending
//!                    sequence (converging cursors).

pub mod rain_water;
pub mod two_sum;
