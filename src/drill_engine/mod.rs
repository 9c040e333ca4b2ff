//! Core drill engine: bead mechanics, weighted sampling, and set assembly.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: magnitudes, requests, sets, batches |
//! | `beads`     | Single-column bead legality (which moves a digit allows) |
//! | `column`    | Running per-column state while a set is dealt |
//! | `sampler`   | Weighted move picking with an anti-reversal bias |
//! | `rows`      | One synchronized row: shared sign, one move per column |
//! | `assembler` | Whole-set assembly, dead-end restarts, batch accounting |
//! | `freeform`  | Unconstrained two-digit flash sets |
//! | `generator` | Entry points `generate_drills()` / `generate_drill_batch()` |

pub mod assembler;
pub mod beads;
pub mod column;
pub mod freeform;
pub mod generator;
pub mod models;
pub mod rows;
pub mod sampler;

// Re-export the public API surface so callers can use
// `drill_engine::generate_drills` without reaching into sub-modules.
pub use generator::{generate_drill_batch, generate_drills, generate_freeform};
pub use models::{
    DrillBatch, DrillMode, DrillRequest, DrillSet, Magnitude, Sign,
    MAX_ROWS, MIN_ROWS,
};
