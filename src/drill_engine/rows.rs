use rand::Rng;

use crate::drill_engine::{
    beads::valid_moves,
    column::Column,
    models::Sign,
    sampler::pick_weighted,
};

/// Deal one row: pick the shared direction, then one move per column.
///
/// Every column moves in the same direction within a row, so the flashed
/// number never mixes added and removed beads.  The opening row always
/// adds; later rows take whichever direction is open on all columns at
/// once, flipping a coin when both are.  Applies the moves to `columns`
/// and returns the combined place-weighted number, or `None` on a dead
/// end (no direction open everywhere, or an opening row that cannot add).
/// A dead end discards the whole set attempt.
pub fn deal_row<R: Rng>(
    rng: &mut R,
    columns: &mut [Column],
    places: &[i32],
    row: usize,
) -> Option<i32> {
    debug_assert_eq!(columns.len(), places.len());

    let can_plus = columns
        .iter()
        .all(|c| !valid_moves(c.value(), Sign::Plus).is_empty());
    let can_minus = columns
        .iter()
        .all(|c| !valid_moves(c.value(), Sign::Minus).is_empty());

    let sign = if row == 0 {
        if !can_plus {
            return None;
        }
        Sign::Plus
    } else {
        match (can_plus, can_minus) {
            (false, false) => return None,
            (true, false) => Sign::Plus,
            (false, true) => Sign::Minus,
            (true, true) => {
                if rng.gen_bool(0.5) {
                    Sign::Plus
                } else {
                    Sign::Minus
                }
            }
        }
    };

    let mut combined = 0i32;
    for (column, &place) in columns.iter_mut().zip(places) {
        let legal = valid_moves(column.value(), sign);
        let mv = pick_weighted(rng, &legal, column.last_move());
        column.apply(mv);
        combined += i32::from(mv) * place;
    }
    Some(combined)
}
