use crate::drill_engine::beads;

/// Bead state of one decimal column while a set is dealt.
///
/// Tracks the running digit plus the move that produced it, which the
/// sampler uses to steer away from immediate reversals. Columns start
/// cleared and live for a single set attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    value: u8,
    last_move: i8,
}

impl Column {
    /// A cleared column: value 0, no move made yet.
    pub fn new() -> Self {
        Column { value: 0, last_move: 0 }
    }

    /// Current digit, 0..=9.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Move applied on the previous row, or 0 before the first row.
    pub fn last_move(&self) -> i8 {
        self.last_move
    }

    /// True when the five-bead is down.
    pub fn heaven_active(&self) -> bool {
        beads::heaven_active(self.value)
    }

    /// Active one-beads, 0..=4.
    pub fn earth_beads(&self) -> u8 {
        beads::earth_beads(self.value)
    }

    /// Apply one move to the column.
    ///
    /// # Panics
    /// Panics if the move would leave the digit range. Callers are expected
    /// to pick from [`beads::valid_moves`] first.
    pub fn apply(&mut self, mv: i8) {
        let next = self.value as i8 + mv;
        assert!(
            (0..=9).contains(&next),
            "move {} from {} leaves the digit range",
            mv,
            self.value
        );
        self.value = next as u8;
        self.last_move = mv;
    }
}

impl Default for Column {
    fn default() -> Self {
        Column::new()
    }
}
