//! Full demo of the drill generator.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `soroban_drill_gen` works end to end:
//!
//! 1. **Minimal API**: `DrillRequest::new(magnitude)` with stock settings.
//! 2. **All six magnitudes**: one seeded batch per tier, so the output is
//!    deterministic and reproducible.
//! 3. **Over-requesting**: how a caller locks in a firm round count even
//!    though multi-column sets can be dropped.
//! 4. **Freeform mode**: plain two-digit sequences with no bead rules.
//! 5. **Flash session JSON**: the client-facing envelope.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - Every number in a set moves each active column with a single legal
//!   bead motion; the running board state never leaves 0..=9 per column.
//! - `generate_drill_batch` reports how many requested sets were dropped;
//!   `generate_drills` returns just the sets.

use soroban_drill_gen::{
    generate_drill_batch, generate_drills, generate_freeform, to_flash_session,
    DrillRequest, DrillSet, Magnitude,
};

/// Pretty-print one drill set as a column of signed numbers and its sum.
fn print_set(index: usize, set: &DrillSet) {
    let rows: Vec<String> = set.numbers.iter().map(|n| format!("{:+}", n)).collect();
    println!("  Set {:>2}:  {}  =  {}", index + 1, rows.join("  "), set.answer);
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // DrillRequest::new() only requires a magnitude; defaults are five sets
    // of ten rows from an entropy seed.
    println!();
    println!("══ Minimal API: DrillRequest::new() ══");
    println!();
    let sets = generate_drills(DrillRequest::new(Magnitude::Units));
    for (i, set) in sets.iter().enumerate() {
        print_set(i, set);
    }

    // ── All six magnitudes ─────────────────────────────────────────────────
    // One batch per tier, fixed seeds for reproducible output.
    println!();
    println!("══ All six magnitudes (3 sets x 6 rows each) ══");

    let magnitudes = [
        (Magnitude::Units,            1001u64),
        (Magnitude::Tens,             2002),
        (Magnitude::Hundreds,         3003),
        (Magnitude::Thousands,        4004),
        (Magnitude::TenThousands,     5005),
        (Magnitude::HundredThousands, 6006),
    ];

    for (magnitude, seed) in magnitudes {
        let batch = generate_drill_batch(DrillRequest {
            magnitude,
            set_count: 3,
            rows: 6,
            mode: Default::default(),
            rng_seed: Some(seed),
        });
        println!();
        println!("  [{} — {} column(s)]  seed={}  dropped={}",
            magnitude, magnitude.columns(), seed, batch.dropped);
        for (i, set) in batch.sets.iter().enumerate() {
            print_set(i, set);
        }
    }

    // ── Over-requesting ────────────────────────────────────────────────────
    // Multi-column sets can be dropped when the columns keep dead-ending.
    // Ask for a few spares and slice what you need.
    println!();
    println!("══ Over-requesting: 10 rounds wanted, 15 requested ══");
    println!();
    let rounds = 10usize;
    let sets = generate_drills(DrillRequest {
        magnitude: Magnitude::Hundreds,
        set_count: rounds + 5,
        rows: 8,
        mode: Default::default(),
        rng_seed: Some(7777),
    });
    println!("  Delivered {} sets, keeping the first {}.", sets.len(), rounds);
    for (i, set) in sets.iter().take(rounds).enumerate() {
        print_set(i, set);
    }

    // ── Freeform mode ──────────────────────────────────────────────────────
    // No bead rules: plain two-digit numbers, total never below 1.
    println!();
    println!("══ Freeform: 4 sets x 8 rows, seed=42 ══");
    println!();
    for (i, set) in generate_freeform(4, 8, Some(42)).iter().enumerate() {
        print_set(i, set);
    }

    // ── Flash session JSON ─────────────────────────────────────────────────
    // The envelope a flashcard client loads: sign split from digits so the
    // minus can be styled as its own element.
    println!();
    println!("══ Flash session JSON (Tens, 2 sets x 3 rows, seed=9) ══");
    println!();
    let batch = generate_drill_batch(DrillRequest {
        magnitude: Magnitude::Tens,
        set_count: 2,
        rows: 3,
        mode: Default::default(),
        rng_seed: Some(9),
    });
    let session = to_flash_session(Magnitude::Tens, 3, &batch);
    match serde_json::to_string_pretty(&session) {
        Ok(text) => println!("{}", text),
        Err(err) => eprintln!("failed to render session: {err}"),
    }
}
