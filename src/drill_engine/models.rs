use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Soroban primitives
// ---------------------------------------------------------------------------

/// Shared direction of every column move within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Plus,
    Minus,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Plus => write!(f, "+"),
            Sign::Minus => write!(f, "-"),
        }
    }
}

// ---------------------------------------------------------------------------
// Magnitude tiers
// ---------------------------------------------------------------------------

/// Column-count tier of a drill, units through hundred-thousands.
///
/// The ordered place-value list is the only thing that distinguishes the
/// tiers; everything downstream is parametrized by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Units,
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    HundredThousands,
}

impl Magnitude {
    /// Place values of the active columns, most significant first.
    pub const fn place_values(self) -> &'static [i32] {
        match self {
            Magnitude::Units            => &[1],
            Magnitude::Tens             => &[10, 1],
            Magnitude::Hundreds         => &[100, 10, 1],
            Magnitude::Thousands        => &[1_000, 100, 10, 1],
            Magnitude::TenThousands     => &[10_000, 1_000, 100, 10, 1],
            Magnitude::HundredThousands => &[100_000, 10_000, 1_000, 100, 10, 1],
        }
    }

    /// Number of active decimal columns, 1..=6.
    pub const fn columns(self) -> usize {
        self.place_values().len()
    }

    /// Tier for a raw column count, if one exists.
    pub fn from_columns(columns: usize) -> Option<Magnitude> {
        match columns {
            1 => Some(Magnitude::Units),
            2 => Some(Magnitude::Tens),
            3 => Some(Magnitude::Hundreds),
            4 => Some(Magnitude::Thousands),
            5 => Some(Magnitude::TenThousands),
            6 => Some(Magnitude::HundredThousands),
            _ => None,
        }
    }

    /// Selector key used by the flashcard client.
    pub fn key(self) -> &'static str {
        match self {
            Magnitude::Units            => "units",
            Magnitude::Tens             => "tens",
            Magnitude::Hundreds         => "hundreds",
            Magnitude::Thousands        => "thousands",
            Magnitude::TenThousands     => "ten_thousands",
            Magnitude::HundredThousands => "hundred_thousands",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Magnitude::Units            => "Units",
            Magnitude::Tens             => "Tens",
            Magnitude::Hundreds         => "Hundreds",
            Magnitude::Thousands        => "Thousands",
            Magnitude::TenThousands     => "Ten Thousands",
            Magnitude::HundredThousands => "Hundred Thousands",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Drill request / response types
// ---------------------------------------------------------------------------

/// Drill style tag carried on every request.
///
/// The trainer has only ever shipped one style; nothing branches on this
/// yet. It stays in the request shape so new styles can slot in without
/// changing the call contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillMode {
    #[default]
    Mixed,
}

impl fmt::Display for DrillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillMode::Mixed => write!(f, "Mixed"),
        }
    }
}

/// Fewest rows a set may hold; shorter requests are raised to this.
pub const MIN_ROWS: usize = 1;

/// Most rows a set may hold; longer requests are cut down to this.
pub const MAX_ROWS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillRequest {
    pub magnitude: Magnitude,
    pub set_count: usize,
    pub rows: usize,
    pub mode: DrillMode,
    pub rng_seed: Option<u64>,
}

impl DrillRequest {
    /// Request with the trainer's stock settings: five sets of ten rows,
    /// mixed style, entropy-seeded.
    pub fn new(magnitude: Magnitude) -> Self {
        DrillRequest {
            magnitude,
            set_count: 5,
            rows: 10,
            mode: DrillMode::Mixed,
            rng_seed: None,
        }
    }
}

/// One finished practice sequence: the numbers to flash and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillSet {
    pub numbers: Vec<i32>,
    pub answer: i32,
}

/// Outcome of one batch: the sets that completed plus how many requested
/// sets were dropped after running out of restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillBatch {
    pub sets: Vec<DrillSet>,
    pub dropped: usize,
}
