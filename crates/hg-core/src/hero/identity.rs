//! Hero gender, race, and class definitions

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::error::ChargenError;

/// Hero gender
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[strum(to_string = "male")]
    Male,
    #[strum(to_string = "female")]
    Female,
}

/// Hero race
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Race {
    Dwarf,
    Elf,
    Gnome,
    #[serde(rename = "Half-Elf")]
    #[strum(to_string = "Half-Elf")]
    HalfElf,
    #[serde(rename = "Half-Orc")]
    #[strum(to_string = "Half-Orc")]
    HalfOrc,
    Hobbit,
    #[default]
    Human,
}

impl Race {
    /// Small folk get racial magic and poison resistance from CON
    pub const fn has_hardy_constitution(&self) -> bool {
        matches!(self, Race::Dwarf | Race::Gnome | Race::Hobbit)
    }
}

/// Hero class (guild)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum HeroClass {
    #[default]
    Fighter,
    Cleric,
    Thief,
    Wizard,
}

impl HeroClass {
    /// Wizards and clerics are taught to read and write by their guild
    pub const fn is_lettered(&self) -> bool {
        matches!(self, HeroClass::Wizard | HeroClass::Cleric)
    }
}

/// Exact, case-sensitive match of `s` against the display names of `E`
fn parse_exact<E>(s: &str, kind: &'static str, table: &'static str) -> Result<E, ChargenError>
where
    E: IntoEnumIterator + std::fmt::Display,
{
    E::iter()
        .find(|e| e.to_string() == s)
        .ok_or_else(|| ChargenError::unrecognized(kind, s, table))
}

impl FromStr for Gender {
    type Err = ChargenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, "gender", "genders")
    }
}

impl FromStr for Race {
    type Err = ChargenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, "race", "races")
    }
}

impl FromStr for HeroClass {
    type Err = ChargenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_exact(s, "class", "guilds")
    }
}
