use rand::Rng;

use crate::drill_engine::models::DrillSet;

/// One unconstrained flash set of two-digit numbers.
///
/// The plain flashcard game skips the bead rules entirely: the opener is
/// 10..=99, later rows flip a coin between adding another 10..=99 and
/// subtracting, and a subtraction is only allowed while the running total
/// stays above 20 and never takes it below 1.  Nothing here can dead-end,
/// so every requested set completes.
pub fn generate_set<R: Rng>(rng: &mut R, rows: usize) -> DrillSet {
    let mut numbers = Vec::with_capacity(rows);
    let mut total: i32 = 0;

    for row in 0..rows {
        let number = if row == 0 {
            rng.gen_range(10..=99)
        } else if rng.gen_bool(0.5) && total > 20 {
            let max_sub = (total - 1).min(89);
            -rng.gen_range(10..=max_sub)
        } else {
            rng.gen_range(10..=99)
        };
        total += number;
        numbers.push(number);
    }

    DrillSet { numbers, answer: total }
}

/// Generate `set_count` freeform sets of `rows` numbers each.
pub fn generate_sets<R: Rng>(rng: &mut R, set_count: usize, rows: usize) -> Vec<DrillSet> {
    (0..set_count).map(|_| generate_set(rng, rows)).collect()
}
