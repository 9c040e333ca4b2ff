use rand::{rngs::StdRng, SeedableRng};
use rand::Rng;

use crate::drill_engine::{
    assembler, freeform,
    models::{DrillBatch, DrillRequest, DrillSet, MAX_ROWS, MIN_ROWS},
};

fn request_rng(rng_seed: Option<u64>) -> StdRng {
    match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Generate the requested bead-legal drill sets.
///
/// Failed sets are dropped silently, so the output may hold fewer than
/// `request.set_count` sets; callers that need a firm count over-request.
/// Use [`generate_drill_batch`] to see how many were dropped.
pub fn generate_drills(request: DrillRequest) -> Vec<DrillSet> {
    generate_drill_batch(request).sets
}

/// Generate the requested drill sets along with the dropped-set count.
pub fn generate_drill_batch(request: DrillRequest) -> DrillBatch {
    let mut rng = request_rng(request.rng_seed);
    generate_drill_batch_with(&mut rng, &request)
}

/// Batch generation against a caller-owned randomness source.
///
/// Row counts outside `MIN_ROWS..=MAX_ROWS` are clamped here, so every
/// deeper layer sees a sane length.
pub fn generate_drill_batch_with<R: Rng>(rng: &mut R, request: &DrillRequest) -> DrillBatch {
    let rows = request.rows.clamp(MIN_ROWS, MAX_ROWS);
    assembler::generate_batch(rng, request.set_count, rows, request.magnitude.place_values())
}

/// Generate unconstrained two-digit flash sets.
///
/// These skip the bead rules, so every requested set completes and the
/// output length always equals `set_count`.
pub fn generate_freeform(set_count: usize, rows: usize, rng_seed: Option<u64>) -> Vec<DrillSet> {
    let mut rng = request_rng(rng_seed);
    let rows = rows.clamp(MIN_ROWS, MAX_ROWS);
    freeform::generate_sets(&mut rng, set_count, rows)
}
