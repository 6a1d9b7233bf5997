//! Per-race rule tables
//!
//! Trait bounds and adjustments, languages, body size distributions,
//! racial skills, and the racial thief-skill deltas.

use crate::consts::NUM_TRAITS;
use crate::hero::{Gender, Race, Trait};

/// Inclusive min/max per trait, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitBounds {
    pub min: [i8; NUM_TRAITS],
    pub max: [i8; NUM_TRAITS],
}

impl TraitBounds {
    const fn new(min: [i8; NUM_TRAITS], max: [i8; NUM_TRAITS]) -> Self {
        Self { min, max }
    }
}

/// Trait limits for a race
pub const fn trait_bounds(race: Race) -> TraitBounds {
    match race {
        Race::Dwarf => TraitBounds::new([8, 7, 7, 7, 12, 7], [18, 18, 18, 17, 19, 16]),
        Race::Elf => TraitBounds::new([7, 8, 7, 7, 7, 8], [18, 18, 18, 19, 18, 18]),
        Race::Gnome => TraitBounds::new([7, 7, 7, 7, 8, 7], [18, 18, 18, 18, 18, 18]),
        Race::HalfElf => TraitBounds::new([7, 7, 7, 7, 8, 7], [18, 18, 18, 18, 18, 18]),
        Race::HalfOrc => TraitBounds::new([9, 7, 7, 7, 13, 7], [19, 17, 14, 17, 19, 12]),
        Race::Hobbit => TraitBounds::new([7, 7, 7, 8, 10, 7], [17, 18, 17, 18, 19, 18]),
        Race::Human => TraitBounds::new([8, 8, 8, 8, 8, 8], [18, 18, 18, 18, 18, 18]),
    }
}

/// Racial bonuses and penalties applied after the class swap
pub const fn trait_adjustments(race: Race) -> &'static [(Trait, i8)] {
    match race {
        Race::Dwarf => &[(Trait::Constitution, 1), (Trait::Charisma, -1)],
        Race::Elf => &[(Trait::Constitution, -1), (Trait::Dexterity, 1)],
        Race::HalfOrc => &[
            (Trait::Strength, 1),
            (Trait::Constitution, 1),
            (Trait::Charisma, -2),
        ],
        Race::Hobbit => &[(Trait::Strength, -1), (Trait::Dexterity, 1)],
        Race::Gnome | Race::HalfElf | Race::Human => &[],
    }
}

/// Gender adjustments; male is the baseline
pub const fn gender_adjustments(gender: Gender) -> &'static [(Trait, i8)] {
    match gender {
        Gender::Male => &[],
        Gender::Female => &[
            (Trait::Strength, -1),
            (Trait::Constitution, 1),
            (Trait::Charisma, 1),
        ],
    }
}

/// How a race comes by its second language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacialTongue {
    None,
    Always(&'static str),
    /// Known on a percentile roll of 50 or more
    HalfChance(&'static str),
}

pub const fn racial_tongue(race: Race) -> RacialTongue {
    match race {
        Race::Dwarf => RacialTongue::Always("Groken"),
        Race::Elf => RacialTongue::Always("Elvish"),
        Race::Gnome => RacialTongue::Always("Gnomen"),
        Race::HalfElf => RacialTongue::HalfChance("Elvish"),
        Race::HalfOrc => RacialTongue::HalfChance("Orcish"),
        Race::Hobbit => RacialTongue::Always("Tolkeen"),
        Race::Human => RacialTongue::None,
    }
}

/// Distribution of a body measure: gendered averages and the dice that move
/// a short/light or tall/heavy hero away from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyDistribution {
    pub male_avg: u32,
    pub female_avg: u32,
    pub lo_dice: u32,
    pub lo_sides: u32,
    pub hi_dice: u32,
    pub hi_sides: u32,
}

impl BodyDistribution {
    const fn new(
        male_avg: u32,
        female_avg: u32,
        lo_dice: u32,
        lo_sides: u32,
        hi_dice: u32,
        hi_sides: u32,
    ) -> Self {
        Self { male_avg, female_avg, lo_dice, lo_sides, hi_dice, hi_sides }
    }

    pub const fn average(&self, gender: Gender) -> u32 {
        match gender {
            Gender::Male => self.male_avg,
            Gender::Female => self.female_avg,
        }
    }
}

/// Height in inches
pub const fn height_table(race: Race) -> BodyDistribution {
    match race {
        Race::Hobbit => BodyDistribution::new(36, 33, 1, 3, 1, 6),
        Race::Gnome => BodyDistribution::new(42, 39, 1, 3, 1, 3),
        Race::Dwarf => BodyDistribution::new(48, 46, 1, 4, 1, 6),
        Race::Elf => BodyDistribution::new(60, 54, 1, 4, 1, 6),
        Race::HalfElf => BodyDistribution::new(66, 62, 1, 6, 1, 6),
        Race::Human => BodyDistribution::new(68, 64, 1, 12, 1, 12),
        Race::HalfOrc => BodyDistribution::new(70, 65, 2, 4, 2, 4),
    }
}

/// Weight in pounds
pub const fn weight_table(race: Race) -> BodyDistribution {
    match race {
        Race::Hobbit => BodyDistribution::new(60, 50, 2, 4, 2, 6),
        Race::Gnome => BodyDistribution::new(80, 75, 2, 4, 2, 6),
        Race::Elf => BodyDistribution::new(100, 80, 1, 10, 1, 20),
        Race::HalfElf => BodyDistribution::new(130, 100, 1, 20, 1, 20),
        Race::Dwarf => BodyDistribution::new(150, 120, 2, 8, 2, 12),
        Race::Human => BodyDistribution::new(175, 130, 3, 12, 5, 12),
        Race::HalfOrc => BodyDistribution::new(180, 150, 3, 8, 4, 10),
    }
}

/// Innate racial abilities, listed as they appear on the sheet
pub const fn race_skills(race: Race) -> &'static [&'static str] {
    match race {
        Race::Dwarf => &[
            "Infravision, 60'",
            "Detect slopes in underground passages (75%)",
            "Detect new construction in tunnel (75%)",
            "Detect sliding or shifting walls or rooms (66%)",
            "Detect stonework traps (50%)",
            "Determine approximate underground depth (50%)",
        ],
        Race::Elf => &[
            "Infravision, 60'",
            "Resistance to Sleep and Charm Spells (90%). Second normal Save allowed",
            "Archery: +1 to Hit with bow (not crossbow)",
            "Tingling: Detect secret doors when within 10' (33% passive; 67% active)",
            "Move Silently (26%)",
        ],
        Race::Gnome => &[
            "Infravision, 60'",
            "Detect slopes in underground passages (80%)",
            "Detect unsafe walls, ceilings, floors (70%)",
            "Determine direction of underground travel (50%)",
            "Determine approximate underground depth (60%)",
        ],
        Race::HalfElf => &[
            "Infravision, 60'",
            "Resistance to Sleep and Charm Spells (30%). Second normal Save allowed",
            "Tingling: Detect secret doors when within 10' (16% passive; 33% active)",
        ],
        Race::Hobbit => &[
            "Infravision, 30'",
            "Resistance to Poison (special save: d20 <= CON/3 + HPMod + MAM)",
            "Resistance to Magic (specials save: d20 <= WIS/3 + MAM)",
            "Detect slopes in underground passages (75%)",
            "Determine direction of underground travel (50%)",
        ],
        Race::HalfOrc => &["Infravision, 60'"],
        Race::Human => &[],
    }
}

/// Racial adjustments to the thief skill percentages, in thief skill order
pub const fn thief_skill_deltas(race: Race) -> &'static [i32] {
    match race {
        Race::Dwarf => &[15, 0, 10, 15, 0, 0, 0, -10],
        Race::Elf => &[0, 5, -5, 0, 5, 10, 5, 0],
        Race::Gnome => &[10, 0, 5, 10, 5, 5, 10, -15],
        Race::HalfElf => &[0, 10, 0, 0, 0, 5, 0, 0],
        Race::Hobbit => &[5, 5, 5, 5, 10, 15, 5, -15],
        Race::HalfOrc => &[5, -5, 5, 5, 0, 0, 5, 0],
        Race::Human => &[0, 0, 0, 0, 0, 0, 0, 0],
    }
}
