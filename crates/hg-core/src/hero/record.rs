//! The finished hero
//!
//! A [`Hero`] is filled in once by the generator and is read-only
//! afterwards. Everything here is plain data for presentation.

use serde::Serialize;
use strum::Display;

use crate::consts::GPW_PER_POUND;
use crate::error::Diagnostic;
use crate::tables::occupation::Occupation;
use crate::tables::skills::SkillDescription;
use crate::tables::thief::ThiefSkillKind;

use super::{Gender, HeroClass, Race, Traits};

/// A carried item; weight is in gpw (8 gpw to the pound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: &'static str,
    pub weight: u32,
}

impl Item {
    pub const fn new(name: &'static str, weight: u32) -> Self {
        Self { name, weight }
    }

    pub fn pounds(&self) -> f64 {
        f64::from(self.weight) / f64::from(GPW_PER_POUND)
    }
}

/// Total gpw carried
pub fn tally_load(items: &[Item]) -> u32 {
    items.iter().map(|i| i.weight).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Literacy {
    #[strum(to_string = "illiterate")]
    Illiterate,
    #[strum(to_string = "Can read only")]
    ReadOnly,
    #[strum(to_string = "Can read and write")]
    ReadWrite,
}

/// STR and DEX driven combat numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CombatMods {
    pub to_hit_melee: i32,
    pub damage: i32,
    /// gpw a hero can carry unencumbered
    pub weight_allowance: u32,
    pub to_hit_missile: i32,
    pub ac_mod: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Knowledge {
    pub languages: Vec<&'static str>,
    /// Further languages the hero may still learn
    pub max_languages: i32,
    pub literacy: Literacy,
}

/// Saving throw bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resistances {
    /// Magic attack modifier, from WIS
    pub magic_attack: i32,
    /// Racial magic resistance (hardy races only)
    pub racial_magic: i32,
    /// Racial poison resistance (hardy races only)
    pub racial_poison: i32,
}

/// Unarmed combat values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NonLethal {
    pub overbearing: i32,
    pub grappling: i32,
    pub pummeling: i32,
    pub shield_bash: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Purse {
    pub in_hand: u32,
    pub banked: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Physique {
    /// Inches
    pub height: u32,
    /// Pounds
    pub weight: u32,
}

impl Physique {
    pub const fn feet_and_inches(&self) -> (u32, u32) {
        feet_and_inches(self.height)
    }
}

pub const fn feet_and_inches(inches: u32) -> (u32, u32) {
    (inches / 12, inches % 12)
}

/// Spell resources; only the lettered guilds cast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "guild")]
pub enum Spellcasting {
    Wizard {
        points_per_level: i32,
        spell_points: i32,
        percent_to_learn: i32,
        spellbook: Vec<&'static str>,
    },
    Cleric {
        turn_undead: i32,
        points_per_level: i32,
        spell_points: i32,
        spells: Vec<&'static str>,
    },
}

impl Spellcasting {
    pub fn spells(&self) -> &[&'static str] {
        match self {
            Spellcasting::Wizard { spellbook, .. } => spellbook,
            Spellcasting::Cleric { spells, .. } => spells,
        }
    }

    pub fn spell_points(&self) -> i32 {
        match self {
            Spellcasting::Wizard { spell_points, .. }
            | Spellcasting::Cleric { spell_points, .. } => *spell_points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThiefSkill {
    pub kind: ThiefSkillKind,
    pub chance: i32,
}

/// One line of an occupation's skill list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OccupationalSkill {
    Skill(SkillDescription),
    Remark(&'static str),
}

impl OccupationalSkill {
    pub fn skill_name(&self) -> Option<&'static str> {
        match self {
            OccupationalSkill::Skill(s) => Some(s.name),
            OccupationalSkill::Remark(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupationRecord {
    pub occupation: Occupation,
    pub description: &'static str,
    pub skills: Vec<OccupationalSkill>,
}

impl OccupationRecord {
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.skill_name() == Some(name))
    }
}

/// A generated hero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    /// Seed of the generator that rolled this hero; replays it exactly
    pub seed: u64,
    pub name: String,
    pub gender: Gender,
    pub race: Race,
    pub class: HeroClass,
    pub level: u32,
    pub xp: u32,
    pub traits: Traits,
    pub combat: CombatMods,
    pub knowledge: Knowledge,
    pub resistances: Resistances,
    pub spellcasting: Option<Spellcasting>,
    pub hp_mod: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub physique: Physique,
    /// Action points, STR + DEX
    pub ap: i32,
    pub non_lethal: NonLethal,
    /// 5' blocks per round
    pub speed: u32,
    pub armor_class: i32,
    pub ac_magic: i32,
    pub purse: Purse,
    pub thief_skills: Vec<ThiefSkill>,
    pub race_skills: Vec<&'static str>,
    pub occupation: OccupationRecord,
    pub inventory: Vec<Item>,
    /// Total carried, in gpw
    pub load: u32,
    pub diagnostics: Vec<Diagnostic>,
}

impl Hero {
    pub fn carries(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_pounds() {
        assert_eq!(Item::new("backpack", 56).pounds(), 7.0);
        assert_eq!(Item::new("belt", 2).pounds(), 0.25);
    }

    #[test]
    fn test_tally_load() {
        let items = [Item::new("torch", 8), Item::new("cloak", 16)];
        assert_eq!(tally_load(&items), 24);
        assert_eq!(tally_load(&[]), 0);
    }

    #[test]
    fn test_feet_and_inches() {
        assert_eq!(feet_and_inches(68), (5, 8));
        assert_eq!(feet_and_inches(36), (3, 0));
        assert_eq!(Physique { height: 47, weight: 150 }.feet_and_inches(), (3, 11));
    }

    #[test]
    fn test_literacy_labels() {
        assert_eq!(Literacy::Illiterate.to_string(), "illiterate");
        assert_eq!(Literacy::ReadWrite.to_string(), "Can read and write");
    }

    #[test]
    fn test_spellcasting_accessors() {
        let wizard = Spellcasting::Wizard {
            points_per_level: 5,
            spell_points: 5,
            percent_to_learn: 85,
            spellbook: vec!["Read Magic"],
        };
        assert_eq!(wizard.spell_points(), 5);
        assert_eq!(wizard.spells(), &["Read Magic"]);
    }
}
