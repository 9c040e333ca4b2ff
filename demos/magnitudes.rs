//! Tour of the six magnitude tiers and what each one trains.
//!
//! Run with: `cargo run --example magnitudes`
//!
//! Prints one sample drill per tier with a short note on the skill it
//! exercises, from single-column bead fluency up to six-column mental
//! images. Fixed seeds keep the output stable between runs.

use soroban_drill_gen::{generate_drills, DrillRequest, Magnitude};

struct TierInfo {
    magnitude: Magnitude,
    seed: u64,
    teaches: &'static str,
}

fn print_tier(info: &TierInfo) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  {} column(s)", info.magnitude, info.magnitude.columns());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Trains: {}", info.teaches);
    println!();

    let sets = generate_drills(DrillRequest {
        magnitude: info.magnitude,
        set_count: 1,
        rows: 8,
        mode: Default::default(),
        rng_seed: Some(info.seed),
    });

    match sets.first() {
        Some(set) => {
            for (row, number) in set.numbers.iter().enumerate() {
                println!("  row {:>2}:  {:>+8}", row + 1, number);
            }
            println!("  ─────────────────");
            println!("  answer:  {:>8}", set.answer);
        }
        None => println!("  (set dropped, re-run with another seed)"),
    }
    println!();
}

fn main() {
    let tiers = [
        TierInfo {
            magnitude: Magnitude::Units,
            seed: 11,
            teaches: "single-column bead paths, five-bead exchanges, 6-9 magnitudes",
        },
        TierInfo {
            magnitude: Magnitude::Tens,
            seed: 22,
            teaches: "two columns moved in one stroke, the first real finger split",
        },
        TierInfo {
            magnitude: Magnitude::Hundreds,
            seed: 33,
            teaches: "three-column sweeps where one stuck column restarts the set",
        },
        TierInfo {
            magnitude: Magnitude::Thousands,
            seed: 44,
            teaches: "holding a four-digit running image without writing it down",
        },
        TierInfo {
            magnitude: Magnitude::TenThousands,
            seed: 55,
            teaches: "five-digit flash reading at competition pace",
        },
        TierInfo {
            magnitude: Magnitude::HundredThousands,
            seed: 66,
            teaches: "the full six-column board, the widest tier the trainer uses",
        },
    ];

    println!();
    println!("══ Magnitude tour: one 8-row drill per tier ══");
    println!();
    for tier in &tiers {
        print_tier(tier);
    }
}
