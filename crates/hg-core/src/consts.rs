//! Core rule constants

/// Number of prime traits
pub const NUM_TRAITS: usize = 6;

/// Normal band for trait-derived modifiers (inclusive)
pub const RANGE_LO_GATE: i8 = 8;
pub const RANGE_HI_GATE: i8 = 14;

/// A freshly rolled trait is never reported below this
pub const ROLL_FLOOR: i8 = RANGE_LO_GATE;

/// No final trait may be lower than this, whatever the race
pub const TRAIT_FLOOR: i8 = 7;

/// Traits above this unlock trait-gated occupational skills
pub const SKILL_GATE: i8 = 14;

/// Inventory weight unit: 8 gpw make one pound
pub const GPW_PER_POUND: u32 = 8;

/// Unarmored armor class
pub const BASE_AC: i32 = 10;

/// Starting level of every hero
pub const START_LEVEL: u32 = 1;

/// Gold dice results are multiplied by this
pub const GOLD_MULTIPLIER: u32 = 10;

/// Percentile bands for height and weight
pub const LOW_BAND_MAX: u32 = 30;
pub const HIGH_BAND_MIN: u32 = 70;

/// AP thresholds for movement blocks; the first entry maps to 2 blocks
pub const SPEED_THRESHOLDS: [i32; 4] = [15, 23, 32, 99];
pub const SPEED_BASE_BLOCKS: u32 = 2;

/// Common tongue every hero speaks
pub const COMMON_TONGUE: &str = "Common";

/// First spell every wizard knows
pub const READ_MAGIC: &str = "Read Magic";

/// Placeholder for a wizard spell still to be chosen
pub const UNCHOSEN_SPELL: &str = "(Spell to be selected)";
