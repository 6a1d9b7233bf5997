//! Hero data: identity, traits, and the finished record

pub mod identity;
pub mod record;
pub mod traits;

pub use identity::{Gender, HeroClass, Race};
pub use record::{
    CombatMods, Hero, Item, Knowledge, Literacy, NonLethal, OccupationRecord, OccupationalSkill,
    Physique, Purse, Resistances, Spellcasting, ThiefSkill, feet_and_inches, tally_load,
};
pub use traits::{Trait, Traits, range_modifier};
