//! # soroban_drill_gen
//!
//! A fully offline, deterministic number-set generator for soroban
//! (Japanese abacus) flash drills.
//!
//! This library generates the add/subtract sequences used in anzan
//! practice: each drill set is a run of numbers that a student carries on
//! the abacus, where every intermediate state is reachable with one bead
//! motion per column and the running total never leaves the board. Six
//! magnitude tiers cover one through six digit columns.
//!
//! ## How it works
//!
//! 1. Create a [`DrillRequest`] with a magnitude, set count, rows per set,
//!    and optional RNG seed.
//! 2. Call [`generate_drills`]. For every row the engine picks one shared
//!    direction, then samples one legal bead move per column, weighted
//!    toward the harder 6..=9 magnitudes and away from move/undo pairs.
//! 3. Each returned [`DrillSet`] holds the numbers to flash and their sum
//!    for answer checking. Multi-column sets that paint themselves into a
//!    corner are retried from scratch and dropped if they keep failing, so
//!    over-request a few spares when a firm count matters.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same drill sheet every time, useful for tests and shared homework.
//! - **Bead-true sequences**: a number only appears when its digits are
//!   single-motion legal on every column at once, the way a soroban is
//!   actually fingered.
//! - **Freeform mode**: [`generate_freeform`] makes plain two-digit
//!   sequences with no bead constraints for the casual flashcard game.
//!
//! ## Quick start
//!
//! ```rust
//! use soroban_drill_gen::{generate_drills, DrillRequest, Magnitude};
//!
//! // Minimal: only the magnitude is required (defaults: 5 sets, 10 rows,
//! // entropy seed):
//! let sets = generate_drills(DrillRequest::new(Magnitude::Tens));
//! for set in &sets {
//!     assert_eq!(set.numbers.iter().sum::<i32>(), set.answer);
//! }
//!
//! // Full control: set every field.
//! let sets = generate_drills(DrillRequest {
//!     magnitude: Magnitude::Hundreds,
//!     set_count: 12,
//!     rows: 8,
//!     mode: Default::default(),
//!     rng_seed: Some(42),
//! });
//!
//! for set in &sets {
//!     println!("{:?} = {}", set.numbers, set.answer);
//! }
//! ```

pub mod drill_engine;
pub mod flashcard_adapter;

// Convenience re-exports so callers can use `soroban_drill_gen::generate_drills`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate_drill_batch, generate_drills, generate_freeform, DrillBatch,
    DrillMode, DrillRequest, DrillSet, Magnitude, Sign, MAX_ROWS, MIN_ROWS,
};
pub use flashcard_adapter::to_flash_session;

#[cfg(test)]
mod tests;
