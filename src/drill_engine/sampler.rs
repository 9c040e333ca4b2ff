//! Weighted move sampling with a bias against immediate reversals.
//!
//! Drills feel too easy when the generator keeps picking small one-bead
//! motions, and feel scripted when a move is followed by its own undo
//! (+7 then -7 leaves the student copying instead of calculating).  The
//! sampler counters both: magnitudes 6..=9 are drawn three times as often
//! as 1..=5, and a draw matching the exact reversal of the previous move
//! is rejected and retried a bounded number of times.
//!
//! ## RNG ordering
//!
//! Each call consumes one `gen_range` per draw, first draw included.  The
//! retry loop makes the consumed count data-dependent, so determinism
//! holds per seed but not across code changes to the pool layout.

use rand::Rng;

/// Extra pool copies given to magnitudes 6..=9, tripling their weight.
const HARD_DIGIT_EXTRA: usize = 2;

/// Draws allowed to dodge an exact reversal before one is let through.
const REVERSAL_DODGE_ATTEMPTS: usize = 8;

/// Expand legal moves into the weighted candidate pool: every move once,
/// hard magnitudes three times.
pub fn weighted_pool(valid: &[i8]) -> Vec<i8> {
    let mut pool = Vec::with_capacity(valid.len() * (1 + HARD_DIGIT_EXTRA));
    for &mv in valid {
        pool.push(mv);
        if mv.unsigned_abs() >= 6 {
            for _ in 0..HARD_DIGIT_EXTRA {
                pool.push(mv);
            }
        }
    }
    pool
}

/// Pick one move from `valid`, favouring hard magnitudes and dodging the
/// exact reversal of `last_move`.
///
/// Up to [`REVERSAL_DODGE_ATTEMPTS`] draws reject a candidate equal to
/// `-last_move`; the dodge is skipped when only one move is legal.  If
/// every draw hits the reversal anyway, one final draw is accepted
/// unconditionally so a cramped column cannot stall the row.
///
/// # Panics
/// Panics if `valid` is empty.  Row assembly only calls this after the
/// direction has been confirmed open for every column.
pub fn pick_weighted<R: Rng>(rng: &mut R, valid: &[i8], last_move: i8) -> i8 {
    assert!(!valid.is_empty(), "no legal moves to sample");
    let pool = weighted_pool(valid);

    for _ in 0..REVERSAL_DODGE_ATTEMPTS {
        let candidate = pool[rng.gen_range(0..pool.len())];
        if valid.len() == 1 || candidate != -last_move {
            return candidate;
        }
    }
    pool[rng.gen_range(0..pool.len())]
}
