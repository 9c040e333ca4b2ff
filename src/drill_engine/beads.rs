use crate::drill_engine::models::Sign;

/// True when the five-bead is pushed down (column holds 5 or more).
pub fn heaven_active(value: u8) -> bool {
    value >= 5
}

/// Active one-beads in the column, 0..=4.
pub fn earth_beads(value: u8) -> u8 {
    value % 5
}

/// Every move legal from `value` in the direction of `sign`, ascending.
/// Empty when the column is stuck in that direction.
///
/// A move is a single bead motion: the running value must stay 0..=9, the
/// five-bead must be free to push (or set to release) when the magnitude
/// reaches 5, and the one-beads must absorb the remainder without a carry
/// into the five-bead.
pub fn valid_moves(value: u8, sign: Sign) -> Vec<i8> {
    debug_assert!(value <= 9, "column value out of range: {}", value);

    let earth = earth_beads(value);
    let heaven = heaven_active(value);
    let candidates = match sign {
        Sign::Plus => 1i8..=9,
        Sign::Minus => -9i8..=-1,
    };

    let mut moves = Vec::new();
    for n in candidates {
        let magnitude = n.unsigned_abs();
        let earth_step = magnitude % 5;
        let uses_heaven = magnitude >= 5;

        let legal = if n > 0 {
            value + magnitude <= 9
                && !(uses_heaven && heaven)
                && earth + earth_step <= 4
        } else {
            magnitude <= value
                && !(uses_heaven && !heaven)
                && earth_step <= earth
        };

        if legal {
            moves.push(n);
        }
    }
    moves
}
