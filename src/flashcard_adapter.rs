use serde_json::{json, Value};
use crate::drill_engine::models::{DrillBatch, DrillSet, Magnitude};

/// Build one flashed-number entry the way the flashcard client renders it:
/// the minus sign is its own styled element, so the digits are shipped as
/// the absolute value's string alongside the raw value.
fn flash_number(value: i32) -> Value {
    json!({
        "value": value,
        "negative": value < 0,
        "digits": value.unsigned_abs().to_string(),
    })
}

/// Build one set entry with its per-number display parts.
fn flash_set(set: &DrillSet) -> Value {
    let numbers: Vec<Value> = set.numbers.iter().map(|&n| flash_number(n)).collect();
    json!({
        "numbers": numbers,
        "answer": set.answer,
    })
}

/// Map a generated batch to the session JSON the flashcard client loads.
///
/// `rows` is the per-set length the client asked for.  `set_count` is the
/// number of sets actually delivered; together with `dropped` the client
/// can tell when its over-request margin was not enough.
pub fn to_flash_session(magnitude: Magnitude, rows: usize, batch: &DrillBatch) -> Value {
    let sets: Vec<Value> = batch.sets.iter().map(flash_set).collect();
    json!({
        "magnitude": magnitude.key(),
        "rows": rows,
        "set_count": sets.len(),
        "dropped": batch.dropped,
        "sets": sets,
    })
}
