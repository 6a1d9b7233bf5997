//! Prime traits (STR, INT, WIS, DEX, CON, CHR)

use crate::consts::{NUM_TRAITS, RANGE_HI_GATE, RANGE_LO_GATE};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Prime trait type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Trait {
    Strength = 0,
    Intelligence = 1,
    Wisdom = 2,
    Dexterity = 3,
    Constitution = 4,
    Charisma = 5,
}

impl Trait {
    /// Short name for display
    pub const fn short_name(&self) -> &'static str {
        match self {
            Trait::Strength => "STR",
            Trait::Intelligence => "INT",
            Trait::Wisdom => "WIS",
            Trait::Dexterity => "DEX",
            Trait::Constitution => "CON",
            Trait::Charisma => "CHR",
        }
    }

    /// Get index (0-5)
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All traits in sheet order
    pub const ALL: [Trait; NUM_TRAITS] = [
        Trait::Strength,
        Trait::Intelligence,
        Trait::Wisdom,
        Trait::Dexterity,
        Trait::Constitution,
        Trait::Charisma,
    ];
}

/// Bonus or penalty for a trait outside the normal 8..=14 band
///
/// Zero inside the band, otherwise the distance past the nearest gate.
pub const fn range_modifier(value: i8) -> i32 {
    if value > RANGE_HI_GATE {
        value as i32 - RANGE_HI_GATE as i32
    } else if value < RANGE_LO_GATE {
        value as i32 - RANGE_LO_GATE as i32
    } else {
        0
    }
}

/// The six trait values of a hero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    values: [i8; NUM_TRAITS],
}

impl Traits {
    /// Create traits with given values, in sheet order
    pub const fn new(values: [i8; NUM_TRAITS]) -> Self {
        Self { values }
    }

    /// Get a trait value
    pub const fn get(&self, which: Trait) -> i8 {
        self.values[which as usize]
    }

    /// Set a trait value
    pub fn set(&mut self, which: Trait, value: i8) {
        self.values[which as usize] = value;
    }

    /// Modify a trait by delta
    pub fn modify(&mut self, which: Trait, delta: i8) {
        let idx = which as usize;
        self.values[idx] = self.values[idx].saturating_add(delta);
    }

    /// Exchange the values held by two traits
    pub fn swap(&mut self, a: Trait, b: Trait) {
        self.values.swap(a.index(), b.index());
    }

    /// The first trait holding the highest value
    pub fn highest(&self) -> Trait {
        let mut best = Trait::Strength;
        for t in Trait::ALL {
            if self.get(t) > self.get(best) {
                best = t;
            }
        }
        best
    }

    /// Force each trait into `min[i]..=max[i]`
    pub fn clamp_to(&mut self, min: &[i8; NUM_TRAITS], max: &[i8; NUM_TRAITS]) {
        for (i, v) in self.values.iter_mut().enumerate() {
            *v = (*v).max(min[i]).min(max[i]);
        }
    }

    /// Raise any trait below `floor` up to it
    pub fn raise_to(&mut self, floor: i8) {
        for v in self.values.iter_mut() {
            *v = (*v).max(floor);
        }
    }

    /// Values in sheet order
    pub const fn values(&self) -> &[i8; NUM_TRAITS] {
        &self.values
    }

    /// Iterate `(trait, value)` pairs in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (Trait, i8)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_modifier_band() {
        for v in 8..=14 {
            assert_eq!(range_modifier(v), 0, "value {v} is inside the band");
        }
        assert_eq!(range_modifier(15), 1);
        assert_eq!(range_modifier(18), 4);
        assert_eq!(range_modifier(7), -1);
        assert_eq!(range_modifier(3), -5);
    }

    #[test]
    fn test_highest_takes_first_on_ties() {
        let traits = Traits::new([12, 16, 9, 16, 10, 11]);
        assert_eq!(traits.highest(), Trait::Intelligence);
    }

    #[test]
    fn test_swap() {
        let mut traits = Traits::new([10, 11, 12, 13, 14, 15]);
        traits.swap(Trait::Strength, Trait::Charisma);
        assert_eq!(traits.values(), &[15, 11, 12, 13, 14, 10]);
    }

    #[test]
    fn test_clamp_to() {
        let mut traits = Traits::new([6, 19, 12, 20, 3, 18]);
        traits.clamp_to(&[8; 6], &[18; 6]);
        assert_eq!(traits.values(), &[8, 18, 12, 18, 8, 18]);
    }
}
