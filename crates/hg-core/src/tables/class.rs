//! Per-class rule tables

use crate::hero::{HeroClass, Item, Trait};

/// The trait a class leans on; it receives the hero's best roll
pub const fn prime_trait(class: HeroClass) -> Trait {
    match class {
        HeroClass::Fighter => Trait::Strength,
        HeroClass::Cleric => Trait::Wisdom,
        HeroClass::Thief => Trait::Dexterity,
        HeroClass::Wizard => Trait::Intelligence,
    }
}

/// Sides of the hit die; starting HP rolls it twice
pub const fn hit_die(class: HeroClass) -> u32 {
    match class {
        HeroClass::Fighter => 10,
        HeroClass::Cleric => 8,
        HeroClass::Thief => 6,
        HeroClass::Wizard => 4,
    }
}

/// Starting purse: `dice`d`sides`, times ten, expected to land in `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldFormula {
    pub dice: u32,
    pub sides: u32,
    pub min: u32,
    pub max: u32,
}

pub const fn gold_formula(class: HeroClass) -> GoldFormula {
    match class {
        HeroClass::Thief => GoldFormula { dice: 2, sides: 6, min: 20, max: 120 },
        HeroClass::Wizard => GoldFormula { dice: 2, sides: 4, min: 20, max: 80 },
        HeroClass::Cleric => GoldFormula { dice: 3, sides: 6, min: 30, max: 180 },
        HeroClass::Fighter => GoldFormula { dice: 5, sides: 4, min: 50, max: 200 },
    }
}

const CLERIC_ITEMS: &[Item] = &[
    Item::new("holy symbol, wooden", 4),
    Item::new("sacred satchel", 2),
    Item::new("quarterstaff", 24),
];

const WIZARD_ITEMS: &[Item] = &[
    Item::new("magic spell book", 32),
    Item::new("magic bag", 2),
    Item::new("walking stick", 24),
];

const THIEF_ITEMS: &[Item] = &[Item::new("thieves' kit", 8), Item::new("dagger", 24)];

const FIGHTER_ITEMS: &[Item] = &[Item::new("short sword w/scabberd", 80)];

/// Guild-issued equipment, added after the base kit
pub const fn class_items(class: HeroClass) -> &'static [Item] {
    match class {
        HeroClass::Cleric => CLERIC_ITEMS,
        HeroClass::Wizard => WIZARD_ITEMS,
        HeroClass::Thief => THIEF_ITEMS,
        HeroClass::Fighter => FIGHTER_ITEMS,
    }
}

/// Every first-level cleric knows these
pub const CLERIC_SPELLS: &[&str] = &[
    "Bless",
    "Command",
    "Create Water",
    "Cure Light Wounds",
    "Detect Evil",
    "Detect Magic",
    "Light",
    "Protection from Evil",
    "Purify Food & Drink",
    "Remove Fear",
    "Resist Cold",
    "Sanctuary",
];
