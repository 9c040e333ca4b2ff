use rand::Rng;

use crate::drill_engine::{
    column::Column,
    models::{DrillBatch, DrillSet},
    rows::deal_row,
};

/// Whole-set restarts allowed before a multi-column set is given up on.
pub const MAX_SET_ATTEMPTS: usize = 50;

/// Run one set attempt from cleared columns, or `None` at the first dead
/// end.
fn attempt_set<R: Rng>(rng: &mut R, rows: usize, places: &[i32]) -> Option<DrillSet> {
    let mut columns = vec![Column::new(); places.len()];
    let mut numbers = Vec::with_capacity(rows);

    for row in 0..rows {
        numbers.push(deal_row(rng, &mut columns, places, row)?);
    }

    let answer = columns
        .iter()
        .zip(places)
        .map(|(column, &place)| i32::from(column.value()) * place)
        .sum();

    Some(DrillSet { numbers, answer })
}

/// Generate one drill set over the given place values.
///
/// A lone column always has an open direction, so it gets a single
/// attempt.  Synchronized columns can dead-end when one column is stuck
/// high and another stuck low; those sets restart from cleared columns,
/// up to [`MAX_SET_ATTEMPTS`] times.  `None` means every attempt dead-ended
/// and the set is skipped.
pub fn generate_set<R: Rng>(rng: &mut R, rows: usize, places: &[i32]) -> Option<DrillSet> {
    let attempts = if places.len() >= 2 { MAX_SET_ATTEMPTS } else { 1 };
    for _ in 0..attempts {
        if let Some(set) = attempt_set(rng, rows, places) {
            return Some(set);
        }
    }
    None
}

/// Generate `set_count` sets, counting the ones that never completed.
pub fn generate_batch<R: Rng>(
    rng: &mut R,
    set_count: usize,
    rows: usize,
    places: &[i32],
) -> DrillBatch {
    let mut sets = Vec::with_capacity(set_count);
    let mut dropped = 0;
    for _ in 0..set_count {
        match generate_set(rng, rows, places) {
            Some(set) => sets.push(set),
            None => dropped += 1,
        }
    }
    DrillBatch { sets, dropped }
}

/// Generate up to `set_count` sets, dropping failed ones silently.
///
/// The delivered list may come up short of `set_count`; callers that need
/// a firm round count over-request a few spares and slice what they need.
pub fn generate_many<R: Rng>(
    rng: &mut R,
    set_count: usize,
    rows: usize,
    places: &[i32],
) -> Vec<DrillSet> {
    generate_batch(rng, set_count, rows, places).sets
}
