//! Strength table, rows for STR 8 through 19

use crate::consts::RANGE_LO_GATE;

const TO_HIT: [i32; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2];
const DAMAGE: [i32; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 3];
/// Carry allowance in gpw
const WEIGHT_ALLOWANCE: [u32; 12] = [280, 280, 400, 400, 560, 560, 800, 800, 1200, 1600, 2800, 4000];

/// Melee modifiers and carry allowance for one strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthRow {
    pub to_hit: i32,
    pub damage: i32,
    pub weight_allowance: u32,
}

/// Look up a strength score; scores off either end of the table use the end row
pub fn strength_row(strength: i8) -> StrengthRow {
    let idx = (strength as i32 - RANGE_LO_GATE as i32).clamp(0, TO_HIT.len() as i32 - 1) as usize;
    StrengthRow {
        to_hit: TO_HIT[idx],
        damage: DAMAGE[idx],
        weight_allowance: WEIGHT_ALLOWANCE[idx],
    }
}
