//! Plain-text character sheet

use std::fmt;

use hg_core::consts::GPW_PER_POUND;
use hg_core::hero::{Hero, OccupationalSkill, Spellcasting, Trait};

/// Displays the hero in character sheet order
pub struct Sheet<'a>(pub &'a Hero);

impl fmt::Display for Sheet<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hero = self.0;
        let t = |which: Trait| format!("{} = {}", which.short_name(), hero.traits.get(which));

        writeln!(
            out,
            "Name: {}  Race: {}  Class: {}",
            hero.name.to_uppercase(),
            hero.race.to_string().to_uppercase(),
            hero.class.to_string().to_uppercase()
        )?;
        writeln!(
            out,
            "Level: {}; Current HP = {}; Max HP = {}; Armor Class = {}; AC Magic = {}",
            hero.level, hero.current_hp, hero.max_hp, hero.armor_class, hero.ac_magic
        )?;
        writeln!(
            out,
            "XP = {}; Speed = {}; Gold in hand (gp/sp) = {} / 0",
            hero.xp, hero.speed, hero.purse.in_hand
        )?;
        writeln!(
            out,
            "Gender = {}; Gold banked (gp/sp) = {} / 0",
            hero.gender, hero.purse.banked
        )?;

        let combat = &hero.combat;
        writeln!(
            out,
            "{}; To Hit (Melee) = {}; Damage Mod = {}; Wt allowance (gpw) = {}; Load (gpw) = {}",
            t(Trait::Strength),
            combat.to_hit_melee,
            combat.damage,
            combat.weight_allowance,
            hero.load
        )?;

        match &hero.spellcasting {
            Some(Spellcasting::Wizard {
                points_per_level,
                spell_points,
                percent_to_learn,
                spellbook,
            }) => writeln!(
                out,
                "{}; % to Know = {}; Current Spell Points = {}; Max Spell Points = {}; \
                 MSPs/Level = {}; Spells Known = {}",
                t(Trait::Intelligence),
                percent_to_learn,
                spell_points,
                spell_points,
                points_per_level,
                spellbook.len()
            )?,
            _ => writeln!(out, "{}", t(Trait::Intelligence))?,
        }

        let res = &hero.resistances;
        match &hero.spellcasting {
            Some(Spellcasting::Cleric {
                turn_undead,
                points_per_level,
                spell_points,
                ..
            }) => writeln!(
                out,
                "{}; Magic Attack Mod = {}; Current Spell Points = {}; Max Spell Points = {}; \
                 CSPs/Level = {}; Turn Undead = {}",
                t(Trait::Wisdom),
                res.magic_attack + res.racial_magic,
                spell_points,
                spell_points,
                points_per_level,
                turn_undead
            )?,
            _ => writeln!(
                out,
                "{}; Magic Attack Mod = {}",
                t(Trait::Wisdom),
                res.magic_attack
            )?,
        }

        writeln!(
            out,
            "{}; HP Mod = {}; Poison Resist = {}",
            t(Trait::Constitution),
            hero.hp_mod,
            res.racial_poison
        )?;
        writeln!(
            out,
            "{}; ToHit (Missile) = {}; AC Mod = {}",
            t(Trait::Dexterity),
            combat.to_hit_missile,
            combat.ac_mod
        )?;
        let (feet, inches) = hero.physique.feet_and_inches();
        writeln!(
            out,
            "{}; Weight (lbs) = {}; Height = {} ({feet}' {inches}\")",
            t(Trait::Charisma),
            hero.physique.weight,
            hero.physique.height
        )?;
        let nl = &hero.non_lethal;
        writeln!(
            out,
            "AP = {}; Overbearing = {}; Grappling = {}; Pummeling = {}; Shield Bash = {}",
            hero.ap, nl.overbearing, nl.grappling, nl.pummeling, nl.shield_bash
        )?;

        let knowledge = &hero.knowledge;
        writeln!(
            out,
            "Languages (can learn {} more): {}",
            knowledge.max_languages,
            knowledge.languages.join(", ")
        )?;
        writeln!(out, "Literacy: {}", knowledge.literacy)?;

        writeln!(out)?;
        writeln!(out, "Special Abilities")?;
        write_list(out, "Racial Skills", hero.race_skills.iter().copied())?;

        let occupation = &hero.occupation;
        writeln!(
            out,
            "Skills for Occupation {}: {}",
            occupation.occupation, occupation.description
        )?;
        for skill in &occupation.skills {
            match skill {
                OccupationalSkill::Skill(desc) => {
                    writeln!(out, "  {}: {}", desc.name, desc.summary)?;
                    for detail in desc.details {
                        writeln!(out, "    --{detail}")?;
                    }
                }
                OccupationalSkill::Remark(text) => writeln!(out, "  {text}")?,
            }
        }

        if !hero.thief_skills.is_empty() {
            writeln!(out, "Thief Skills")?;
            for skill in &hero.thief_skills {
                writeln!(out, "  {}: {}%", skill.kind, skill.chance)?;
            }
        }

        if let Some(casting) = &hero.spellcasting {
            write_list(out, "Spellbook", casting.spells().iter().copied())?;
        }

        writeln!(out)?;
        writeln!(out, "Inventory | Weight (gpw)")?;
        for (n, item) in hero.inventory.iter().enumerate() {
            writeln!(out, "  {:>2}. {} | {}", n + 1, item.name, item.weight)?;
        }
        writeln!(
            out,
            "Total load = {} gpw ({} lb)",
            hero.load,
            f64::from(hero.load) / f64::from(GPW_PER_POUND)
        )?;

        for diag in &hero.diagnostics {
            writeln!(out, "Note: {diag}")?;
        }
        Ok(())
    }
}

fn write_list<'a>(
    out: &mut fmt::Formatter<'_>,
    title: &str,
    items: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    writeln!(out, "{title}")?;
    for item in items {
        writeln!(out, "  {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hg_core::{Diagnostic, Gender, HeroClass, HeroInput, HeroRng, Race, generate};

    fn sheet_for(race: Race, class: HeroClass) -> String {
        let input = HeroInput::new("Falsoon", Gender::Male, race, class);
        let hero = generate(&input, &mut HeroRng::new(42)).unwrap();
        Sheet(&hero).to_string()
    }

    #[test]
    fn test_fighter_sheet_sections() {
        let sheet = sheet_for(Race::Human, HeroClass::Fighter);
        assert!(sheet.starts_with("Name: FALSOON  Race: HUMAN  Class: FIGHTER"));
        assert!(sheet.contains("Languages (can learn"));
        assert!(sheet.contains("short sword w/scabberd | 80"));
        assert!(!sheet.contains("Thief Skills"));
        assert!(!sheet.contains("Spellbook"));
    }

    #[test]
    fn test_thief_sheet_lists_skills() {
        let sheet = sheet_for(Race::Hobbit, HeroClass::Thief);
        assert!(sheet.contains("Thief Skills"));
        assert!(sheet.contains("Climb Walls: "));
    }

    #[test]
    fn test_wizard_sheet_lists_spellbook() {
        let sheet = sheet_for(Race::Elf, HeroClass::Wizard);
        assert!(sheet.contains("% to Know"));
        assert!(sheet.contains("Read Magic"));
    }

    #[test]
    fn test_diagnostics_close_the_sheet() {
        let input = HeroInput::new("Falsoon", Gender::Male, Race::Human, HeroClass::Thief);
        let mut hero = generate(&input, &mut HeroRng::new(42)).unwrap();
        assert!(!Sheet(&hero).to_string().contains("Note:"));

        hero.diagnostics.push(Diagnostic::GoldOutOfBand {
            class: HeroClass::Thief,
            gold: 130,
            min: 20,
            max: 120,
        });
        let sheet = format!("{}", Sheet(&hero));
        assert!(sheet.ends_with("Note: Thief gold roll 130 outside expected range 20..=120\n"));
    }
}
