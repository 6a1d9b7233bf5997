//! Static rule tables
//!
//! Everything the generator looks up lives here as immutable data keyed by
//! enums. [`validate`] checks the cross-table assumptions the generator
//! relies on, so a bad edit surfaces before the first roll.

pub mod class;
pub mod inventory;
pub mod occupation;
pub mod race;
pub mod skills;
pub mod strength;
pub mod thief;

use strum::IntoEnumIterator;

use crate::error::ChargenError;
use crate::hero::Race;
use occupation::{Occupation, OccupationRule};
use skills::SkillCatalog;
use thief::ThiefSkillKind;

/// Check table shapes and cross-references
pub fn validate() -> Result<(), ChargenError> {
    let skill_count = ThiefSkillKind::iter().count();

    check_len("thief base chances", skill_count, thief::BASE_CHANCES.len())?;

    for dex in i8::MIN..=i8::MAX {
        let row = thief::dex_deltas(dex);
        if !row.is_empty() {
            check_len("thief dex deltas", skill_count, row.len())?;
        }
    }

    for race in Race::iter() {
        check_len(
            "thief race deltas",
            skill_count,
            race::thief_skill_deltas(race).len(),
        )?;
    }

    let catalog = skills::skill_catalog()?;
    for occupation in Occupation::ALL {
        check_rule_skills(occupation, &occupation.rule(), catalog)?;
    }

    Ok(())
}

/// Every skill `rule` can grant must be in `catalog`
fn check_rule_skills(
    occupation: Occupation,
    rule: &OccupationRule,
    catalog: &SkillCatalog,
) -> Result<(), ChargenError> {
    match rule.referenced_skills().find(|s| !catalog.contains(s)) {
        Some(skill) => Err(ChargenError::UnknownSkill {
            occupation: occupation_name(occupation),
            skill,
        }),
        None => Ok(()),
    }
}

fn check_len(table: &'static str, expected: usize, found: usize) -> Result<(), ChargenError> {
    if expected == found {
        Ok(())
    } else {
        Err(ChargenError::TableMismatch { table, expected, found })
    }
}

fn occupation_name(occupation: Occupation) -> &'static str {
    occupation.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_tables_are_consistent() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_rule_naming_missing_skill_is_refused() {
        let catalog = skills::skill_catalog().unwrap();
        let rule = OccupationRule {
            skills: &["Sewing", "Juggling"],
            ..Occupation::Tailor.rule()
        };
        assert_eq!(
            check_rule_skills(Occupation::Tailor, &rule, catalog),
            Err(ChargenError::UnknownSkill {
                occupation: "Tailor",
                skill: "Juggling",
            })
        );
    }

    #[test]
    fn test_gated_skill_names_are_checked() {
        let catalog = skills::skill_catalog().unwrap();
        let rule = OccupationRule {
            gates: &[occupation::Gate {
                requires: &[(crate::hero::Trait::Strength, 14)],
                skills: &["Lift Portcullis"],
            }],
            ..Occupation::Miner.rule()
        };
        assert!(matches!(
            check_rule_skills(Occupation::Miner, &rule, catalog),
            Err(ChargenError::UnknownSkill { skill: "Lift Portcullis", .. })
        ));
    }

    #[test]
    fn test_check_len_reports_table() {
        assert_eq!(
            check_len("thief dex deltas", 8, 7),
            Err(ChargenError::TableMismatch {
                table: "thief dex deltas",
                expected: 8,
                found: 7
            })
        );
    }
}
