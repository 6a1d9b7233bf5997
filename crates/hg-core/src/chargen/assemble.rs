//! Skill and inventory assembly
//!
//! Thief percentages, racial skills, the starting pack, and the prior
//! occupation with whatever skills and kit it brings.

use tracing::debug;

use crate::error::ChargenError;
use crate::hero::{
    HeroClass, Item, OccupationRecord, OccupationalSkill, Race, ThiefSkill, Trait, Traits,
};
use crate::rng::HeroRng;
use crate::tables::occupation::{Occupation, OccupationRule, Remark};
use crate::tables::skills::{SkillCatalog, skill_catalog};
use crate::tables::thief::{self, ThiefSkillKind};
use crate::tables::{class, inventory, race};
use strum::IntoEnumIterator;

/// Level 1 thief percentages after DEX and race adjustments
///
/// Empty for every other class.
pub fn thief_skills(class: HeroClass, race: Race, traits: &Traits) -> Vec<ThiefSkill> {
    if class != HeroClass::Thief {
        return Vec::new();
    }
    let dex_row = thief::dex_deltas(traits.get(Trait::Dexterity));
    let race_row = race::thief_skill_deltas(race);

    ThiefSkillKind::iter()
        .enumerate()
        .map(|(i, kind)| {
            let base = thief::BASE_CHANCES.get(i).copied().unwrap_or(0);
            let dex = dex_row.get(i).copied().unwrap_or(0);
            let racial = race_row.get(i).copied().unwrap_or(0);
            ThiefSkill { kind, chance: base + dex + racial }
        })
        .collect()
}

pub fn race_skills(race: Race) -> Vec<&'static str> {
    race::race_skills(race).to_vec()
}

/// Base kit followed by the guild's issue
pub fn starting_inventory(class: HeroClass) -> Vec<Item> {
    let mut items = inventory::BASE_KIT.to_vec();
    items.extend_from_slice(class::class_items(class));
    items
}

/// Pick a prior occupation uniformly
pub fn draw_occupation(rng: &mut HeroRng) -> Occupation {
    rng.choose(&Occupation::ALL)
}

/// Resolve an occupation's grants against the hero's traits
///
/// Adds the occupation kit, if any, to `inventory`.
pub fn assign_occupation(
    occupation: Occupation,
    traits: &Traits,
    inventory: &mut Vec<Item>,
) -> Result<OccupationRecord, ChargenError> {
    grant_rule(
        occupation,
        &occupation.rule(),
        traits,
        skill_catalog()?,
        inventory,
    )
}

fn grant_rule(
    occupation: Occupation,
    rule: &OccupationRule,
    traits: &Traits,
    catalog: &SkillCatalog,
    inventory: &mut Vec<Item>,
) -> Result<OccupationRecord, ChargenError> {
    let granted = rule.skills.iter().chain(
        rule.gates
            .iter()
            .filter(|g| g.is_open(traits))
            .flat_map(|g| g.skills.iter()),
    );

    let mut skills = Vec::new();
    if let Some(Remark::Always(text)) = rule.remark {
        skills.push(OccupationalSkill::Remark(text));
    }
    for &name in granted {
        let skill = catalog.get(name).ok_or(ChargenError::UnknownSkill {
            occupation: occupation.into(),
            skill: name,
        })?;
        skills.push(OccupationalSkill::Skill(*skill));
    }
    if skills.is_empty()
        && let Some(Remark::Fallback(text)) = rule.remark
    {
        skills.push(OccupationalSkill::Remark(text));
    }

    if let Some(kit) = rule.kit {
        inventory.push(kit);
    }

    debug!(
        %occupation,
        granted = skills.iter().filter(|s| s.skill_name().is_some()).count(),
        kit = ?rule.kit.map(|k| k.name),
        "assigned occupation"
    );

    Ok(OccupationRecord {
        occupation,
        description: rule.description,
        skills,
    })
}
