//! Unit tests for the `soroban_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage (21 tests)
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical batches; different seeds → varied sets; the plain-list surfaces match their batch counterparts |
//! | Board replay | Every flashed number re-runs on fresh columns: full width, no silent column, digits stay 0..=9, both answer sums agree |
//! | Structural | Magnitude/column-count round trip; stock request defaults; batch accounting; empty requests; row-count clamping |
//! | Per-magnitude | Lone-column digit runs never drop; three-column sets flash full width; subtraction shows up |
//! | Sampling | Hard magnitudes drawn about 3x as often; move/undo pairs stay rare |
//! | Freeform | Requested count always delivered; deterministic per seed |
//! | Adapter | Session JSON mirrors the batch; sign split from digits |

use crate::drill_engine::{
    assembler, generate_drill_batch, generate_drills, generate_freeform, sampler,
    DrillMode, DrillRequest, DrillSet, Magnitude,
};
use crate::flashcard_adapter::to_flash_session;
use rand::{rngs::StdRng, SeedableRng};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic six-set, ten-row request.
fn req(magnitude: Magnitude, seed: u64) -> DrillRequest {
    DrillRequest {
        magnitude,
        set_count: 6,
        rows: 10,
        mode: DrillMode::Mixed,
        rng_seed: Some(seed),
    }
}

/// All six magnitude tiers in ascending column order.
fn all_magnitudes() -> [Magnitude; 6] {
    [
        Magnitude::Units,
        Magnitude::Tens,
        Magnitude::Hundreds,
        Magnitude::Thousands,
        Magnitude::TenThousands,
        Magnitude::HundredThousands,
    ]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

/// Re-run a set's numbers on fresh columns, checking every board invariant
/// along the way. Returns the final column values, most significant first.
fn replay(set: &DrillSet, magnitude: Magnitude) -> Vec<i32> {
    let places = magnitude.place_values();
    let mut values = vec![0i32; places.len()];

    for (row, &number) in set.numbers.iter().enumerate() {
        assert_ne!(number, 0, "row {row} flashed a zero");
        if row == 0 {
            assert!(number > 0, "opening row must add (got {number})");
        }
        let abs = number.abs();
        let top_digit = abs / places[0];
        assert!(
            top_digit >= 1 && top_digit <= 9,
            "row {row} value {number} does not fill the width for {magnitude}"
        );
        for (idx, &place) in places.iter().enumerate() {
            let digit = (abs / place) % 10;
            assert!(
                digit >= 1,
                "row {row} value {number} leaves a column untouched"
            );
            let mv = if number < 0 { -digit } else { digit };
            values[idx] += mv;
            assert!(
                values[idx] >= 0 && values[idx] <= 9,
                "row {row} value {number} drives a column to {}",
                values[idx]
            );
        }
    }
    values
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_reproduces_every_magnitude() {
    for magnitude in all_magnitudes() {
        let a = generate_drill_batch(req(magnitude, 12345));
        let b = generate_drill_batch(req(magnitude, 12345));
        assert_eq!(a, b, "seeded batch not reproducible for {magnitude:?}");
    }
}

#[test]
fn different_seeds_produce_varied_sets() {
    // Not a hard guarantee, but collisions over ten-row batches are
    // vanishingly unlikely for any reasonable seed range.
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_drill_batch(req(Magnitude::Hundreds, seed));
        let b = generate_drill_batch(req(Magnitude::Hundreds, seed + 500));
        if a == b {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "too many identical batches across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn drills_and_batch_share_one_stream() {
    for magnitude in all_magnitudes() {
        let request = req(magnitude, 2024);
        let plain = generate_drills(request.clone());
        let batch = generate_drill_batch(request);
        assert_eq!(plain, batch.sets, "set lists diverge for {magnitude:?}");
    }
}

#[test]
fn silent_drop_list_matches_the_batch() {
    // The plain list surface is the batch minus its accounting.
    let places = Magnitude::Thousands.place_values();
    let mut rng_a = StdRng::seed_from_u64(606);
    let mut rng_b = StdRng::seed_from_u64(606);
    let many = assembler::generate_many(&mut rng_a, 8, 6, places);
    let batch = assembler::generate_batch(&mut rng_b, 8, 6, places);
    assert_eq!(many, batch.sets);
}

#[test]
fn entropy_seed_produces_valid_sets() {
    // Smoke test: rng_seed: None must not panic and must satisfy all the
    // board invariants.
    let mut request = DrillRequest::new(Magnitude::Tens);
    request.rng_seed = None;
    for set in generate_drills(request) {
        assert_eq!(set.numbers.len(), 10);
        replay(&set, Magnitude::Tens);
    }
}

// ── board replay ─────────────────────────────────────────────────────────────

#[test]
fn flashed_numbers_replay_on_the_board() {
    for magnitude in all_magnitudes() {
        for seed in SEEDS {
            let batch = generate_drill_batch(req(magnitude, seed));
            for set in &batch.sets {
                assert_eq!(set.numbers.len(), 10);
                let finals = replay(set, magnitude);
                let board_total: i32 = finals
                    .iter()
                    .zip(magnitude.place_values())
                    .map(|(&value, &place)| value * place)
                    .sum();
                assert_eq!(
                    board_total, set.answer,
                    "board state disagrees with answer for {magnitude:?} seed={seed}"
                );
                assert_eq!(
                    set.numbers.iter().sum::<i32>(),
                    set.answer,
                    "number sum disagrees with answer for {magnitude:?} seed={seed}"
                );
                assert!(set.answer >= 0);
            }
        }
    }
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn magnitude_tiers_round_trip_their_column_counts() {
    for (idx, magnitude) in all_magnitudes().iter().enumerate() {
        assert_eq!(magnitude.columns(), idx + 1);
        assert_eq!(Magnitude::from_columns(idx + 1), Some(*magnitude));
        assert_eq!(magnitude.place_values().len(), idx + 1);
        assert_eq!(magnitude.place_values().last(), Some(&1));
    }
    assert_eq!(Magnitude::from_columns(0), None);
    assert_eq!(Magnitude::from_columns(7), None);
}

#[test]
fn stock_request_defaults() {
    let request = DrillRequest::new(Magnitude::Thousands);
    assert_eq!(request.magnitude, Magnitude::Thousands);
    assert_eq!(request.set_count, 5);
    assert_eq!(request.rows, 10);
    assert_eq!(request.mode, DrillMode::Mixed);
    assert_eq!(request.rng_seed, None);
}

#[test]
fn batch_accounting_is_exact() {
    for magnitude in all_magnitudes() {
        for seed in SEEDS {
            let request = req(magnitude, seed);
            let batch = generate_drill_batch(request.clone());
            assert_eq!(
                batch.sets.len() + batch.dropped,
                request.set_count,
                "sets plus dropped must cover the request for {magnitude:?} seed={seed}"
            );
        }
    }
}

#[test]
fn empty_request_yields_empty_batch() {
    let mut request = req(Magnitude::Hundreds, 3);
    request.set_count = 0;
    let batch = generate_drill_batch(request);
    assert!(batch.sets.is_empty());
    assert_eq!(batch.dropped, 0);
}

#[test]
fn row_counts_clamp_to_bounds() {
    let mut request = req(Magnitude::Tens, 8);
    request.rows = 0;
    let batch = generate_drill_batch(request);
    assert_eq!(batch.dropped, 0);
    for set in &batch.sets {
        assert_eq!(set.numbers.len(), 1, "zero rows must clamp up to one");
    }

    let mut request = req(Magnitude::Tens, 8);
    request.rows = 10_000;
    let batch = generate_drill_batch(request);
    assert!(!batch.sets.is_empty());
    for set in &batch.sets {
        assert_eq!(set.numbers.len(), 50, "oversized rows must clamp down to fifty");
    }
}

// ── per-magnitude behaviour ──────────────────────────────────────────────────

#[test]
fn lone_column_rows_are_single_digits() {
    let mut request = req(Magnitude::Units, 31);
    request.rows = 1;
    request.set_count = 5;
    let batch = generate_drill_batch(request);
    assert_eq!(batch.sets.len(), 5);
    assert_eq!(batch.dropped, 0);
    for set in &batch.sets {
        assert_eq!(set.numbers.len(), 1);
        assert!(set.numbers[0] >= 1 && set.numbers[0] <= 9);
        assert_eq!(set.answer, set.numbers[0]);
    }
}

#[test]
fn lone_column_sets_never_drop() {
    // A single column always has an open direction, so no attempt can
    // dead-end regardless of length.
    for seed in SEEDS {
        let mut request = req(Magnitude::Units, seed);
        request.rows = 50;
        request.set_count = 10;
        let batch = generate_drill_batch(request);
        assert_eq!(batch.sets.len(), 10);
        assert_eq!(batch.dropped, 0);
    }
}

#[test]
fn three_column_sets_flash_full_width() {
    let mut request = req(Magnitude::Hundreds, 64);
    request.rows = 5;
    request.set_count = 20;
    let batch = generate_drill_batch(request);
    for set in &batch.sets {
        assert_eq!(set.numbers.len(), 5);
        for &number in &set.numbers {
            let abs = number.abs();
            assert!(
                abs >= 111 && abs <= 999,
                "three-column value {number} out of range"
            );
        }
        replay(set, Magnitude::Hundreds);
    }
}

#[test]
fn subtraction_shows_up_in_longer_runs() {
    let mut negatives = 0usize;
    for seed in SEEDS {
        let mut request = req(Magnitude::Units, seed);
        request.rows = 20;
        request.set_count = 5;
        for set in generate_drills(request) {
            negatives += set.numbers.iter().filter(|&&n| n < 0).count();
        }
    }
    assert!(negatives > 0, "no subtraction appeared across 500 rows");
}

// ── sampling behaviour ───────────────────────────────────────────────────────

#[test]
fn hard_digits_dominate_draws() {
    // From a cleared column every magnitude 1..=9 is legal; 6..=9 carry
    // triple weight, so their per-digit rate should sit near 3x.
    let mut rng = StdRng::seed_from_u64(4242);
    let all: Vec<i8> = (1..=9).collect();
    let mut counts = [0usize; 10];
    let draws = 20_000;
    for _ in 0..draws {
        let mv = sampler::pick_weighted(&mut rng, &all, 0);
        counts[mv as usize] += 1;
    }
    let easy: usize = (1..=5).map(|d| counts[d]).sum();
    let hard: usize = (6..=9).map(|d| counts[d]).sum();
    let per_easy = easy as f64 / 5.0;
    let per_hard = hard as f64 / 4.0;
    let ratio = per_hard / per_easy;
    assert!(
        ratio > 2.5 && ratio < 3.5,
        "hard/easy draw ratio {ratio:.2} strayed from 3x"
    );
}

#[test]
fn move_undo_pairs_stay_rare() {
    // Adjacent +n/-n pairs should almost never survive the dodge loop.
    let mut rng = StdRng::seed_from_u64(99);
    let places = Magnitude::Units.place_values();
    let mut pairs = 0usize;
    let mut reversals = 0usize;
    for _ in 0..500 {
        let set = assembler::generate_set(&mut rng, 20, places)
            .expect("a lone column cannot dead-end");
        for window in set.numbers.windows(2) {
            pairs += 1;
            if window[1] == -window[0] {
                reversals += 1;
            }
        }
    }
    let rate = reversals as f64 / pairs as f64;
    assert!(rate < 0.05, "move/undo rate {rate:.3} too high");
}

// ── freeform sets ────────────────────────────────────────────────────────────

#[test]
fn freeform_always_delivers_the_full_count() {
    let sets = generate_freeform(12, 15, Some(5));
    assert_eq!(sets.len(), 12);
    for set in &sets {
        assert_eq!(set.numbers.len(), 15);
        assert_eq!(set.numbers.iter().sum::<i32>(), set.answer);
        assert!(set.answer >= 1);
    }

    // Row counts clamp like the bead-legal path.
    let sets = generate_freeform(3, 0, Some(5));
    for set in &sets {
        assert_eq!(set.numbers.len(), 1);
    }
}

#[test]
fn freeform_is_deterministic_per_seed() {
    let a = generate_freeform(8, 12, Some(321));
    let b = generate_freeform(8, 12, Some(321));
    assert_eq!(a, b);
}

// ── flashcard adapter ────────────────────────────────────────────────────────

#[test]
fn flash_session_mirrors_the_batch() {
    let batch = generate_drill_batch(req(Magnitude::Tens, 77));
    let session = to_flash_session(Magnitude::Tens, 10, &batch);

    assert_eq!(session["magnitude"], "tens");
    assert_eq!(session["rows"], 10);
    assert_eq!(session["set_count"].as_u64().unwrap() as usize, batch.sets.len());
    assert_eq!(session["dropped"].as_u64().unwrap() as usize, batch.dropped);

    let sets = session["sets"].as_array().unwrap();
    assert_eq!(sets.len(), batch.sets.len());
    for (entry, set) in sets.iter().zip(&batch.sets) {
        assert_eq!(entry["answer"].as_i64().unwrap() as i32, set.answer);
        let numbers = entry["numbers"].as_array().unwrap();
        assert_eq!(numbers.len(), set.numbers.len());
        for (value, &number) in numbers.iter().zip(&set.numbers) {
            assert_eq!(value["value"].as_i64().unwrap() as i32, number);
        }
    }
}

#[test]
fn flash_session_splits_sign_from_digits() {
    let mut request = req(Magnitude::Hundreds, 13);
    request.rows = 12;
    let batch = generate_drill_batch(request);
    let session = to_flash_session(Magnitude::Hundreds, 12, &batch);

    assert_eq!(session["magnitude"], "hundreds");
    for entry in session["sets"].as_array().unwrap() {
        for value in entry["numbers"].as_array().unwrap() {
            let raw = value["value"].as_i64().unwrap();
            assert_eq!(value["negative"].as_bool().unwrap(), raw < 0);
            assert_eq!(value["digits"].as_str().unwrap(), raw.abs().to_string());
        }
    }
}
