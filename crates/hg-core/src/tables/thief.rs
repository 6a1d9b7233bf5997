//! Thief skill tables

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Thief skills, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ThiefSkillKind {
    #[strum(to_string = "Find/Open Secret Doors")]
    OpenSecretDoors,
    #[strum(to_string = "Pick Pockets")]
    PickPockets,
    #[strum(to_string = "Open Locks")]
    OpenLocks,
    #[strum(to_string = "Find/Remove/Make Traps")]
    FindRemoveTraps,
    #[strum(to_string = "Move Silently")]
    MoveSilently,
    #[strum(to_string = "Hide in Shadows")]
    HideInShadows,
    #[strum(to_string = "Listening")]
    Listening,
    #[strum(to_string = "Climb Walls")]
    ClimbWalls,
}

/// Level 1 chances before DEX and race, in `ThiefSkillKind` order
pub const BASE_CHANCES: &[i32] = &[30, 30, 25, 20, 21, 11, 15, 82];

/// No DEX adjustment inside this band
pub const NEUTRAL_DEX: std::ops::RangeInclusive<i8> = 13..=15;

/// DEX adjustment row; DEX below 9 reads the 9 row and above 18 the 18 row
pub fn dex_deltas(dex: i8) -> &'static [i32] {
    match dex {
        ..=9 => &[0, -15, -10, -10, -20, -10, 0, 0],
        10 => &[0, -10, -5, -10, -15, -5, 0, 0],
        11 => &[0, -5, 0, -5, -10, 0, 0, 0],
        12 => &[0, 0, 0, 0, -5, 0, 0, 0],
        13..=15 => &[],
        16 => &[0, 0, 5, 0, 0, 0, 0, 0],
        17 => &[0, 5, 10, 0, 5, 5, 0, 0],
        18.. => &[0, 10, 15, 5, 10, 10, 0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_skill_order_matches_base_table() {
        assert_eq!(ThiefSkillKind::iter().count(), BASE_CHANCES.len());
        assert_eq!(ThiefSkillKind::OpenSecretDoors.to_string(), "Find/Open Secret Doors");
        assert_eq!(ThiefSkillKind::ClimbWalls.to_string(), "Climb Walls");
    }

    #[test]
    fn test_neutral_band_is_empty() {
        for dex in NEUTRAL_DEX {
            assert!(dex_deltas(dex).is_empty());
        }
    }

    #[test]
    fn test_out_of_table_dex_uses_end_rows() {
        assert_eq!(dex_deltas(7), dex_deltas(9));
        assert_eq!(dex_deltas(19), dex_deltas(18));
    }
}
