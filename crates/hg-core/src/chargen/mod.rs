//! Hero generation pipeline
//!
//! [`generate`] runs every stage in dependency order: traits, then the
//! STR/INT/WIS/CON/DEX derivations, body, hit points, unarmed combat,
//! speed and armor class, gold, class and race skills, inventory, the
//! prior occupation, and finally the load tally.

pub mod assemble;
pub mod derive;
pub mod traits;

use tracing::{debug, warn};

use crate::consts::START_LEVEL;
use crate::error::{ChargenError, Diagnostic};
use crate::hero::{
    Gender, Hero, HeroClass, Knowledge, Physique, Purse, Race, Trait, range_modifier, tally_load,
};
use crate::rng::HeroRng;
use crate::tables::class::{self, GoldFormula};
use crate::tables::{self, race};

/// The four choices a player makes before rolling
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeroInput {
    pub name: String,
    pub gender: Gender,
    pub race: Race,
    pub class: HeroClass,
}

impl HeroInput {
    pub fn new(name: impl Into<String>, gender: Gender, race: Race, class: HeroClass) -> Self {
        Self {
            name: name.into(),
            gender,
            race,
            class,
        }
    }

    /// Build an input from boundary strings, matched exactly
    pub fn parse(name: &str, gender: &str, race: &str, class: &str) -> Result<Self, ChargenError> {
        Ok(Self {
            name: name.to_string(),
            gender: gender.parse()?,
            race: race.parse()?,
            class: class.parse()?,
        })
    }
}

/// Generate a complete hero
pub fn generate(input: &HeroInput, rng: &mut HeroRng) -> Result<Hero, ChargenError> {
    tables::validate()?;

    let HeroInput {
        name,
        gender,
        race,
        class,
    } = input;
    let (gender, race, class) = (*gender, *race, *class);
    let seed = rng.seed();
    debug!(%name, %gender, %race, %class, seed, "generating hero");

    let traits = traits::generate_traits(rng, gender, race, class);
    let int = traits.get(Trait::Intelligence);

    let combat = derive::combat_mods(&traits);
    let knowledge = Knowledge {
        languages: derive::languages(race, rng),
        max_languages: derive::max_languages(int),
        literacy: derive::literacy(int, class),
    };
    let spellcasting = derive::spellcasting(class, &traits);
    let resistances = derive::resistances(race, &traits);
    let hp_mod = range_modifier(traits.get(Trait::Constitution));
    debug!(?combat, ?knowledge, ?resistances, hp_mod, "derived trait modifiers");

    let weight = derive::roll_body(&race::weight_table(race), gender, rng);
    let height = derive::roll_body(&race::height_table(race), gender, rng);
    let physique = Physique { height, weight };

    let max_hp = derive::roll_hit_points(class, hp_mod, rng);

    let ap = i32::from(traits.get(Trait::Strength)) + i32::from(traits.get(Trait::Dexterity));
    let non_lethal = derive::non_lethal(ap, weight, &combat);
    let speed = derive::speed(ap);
    let armor_class = derive::armor_class(&combat);
    debug!(?physique, max_hp, ap, speed, armor_class, "derived physical stats");

    let mut diagnostics = Vec::new();
    let purse = fill_purse(class, class::gold_formula(class), rng, &mut diagnostics);

    let thief_skills = assemble::thief_skills(class, race, &traits);
    let race_skills = assemble::race_skills(race);
    let mut inventory = assemble::starting_inventory(class);
    let occupation = assemble::draw_occupation(rng);
    let occupation = assemble::assign_occupation(occupation, &traits, &mut inventory)?;
    let load = tally_load(&inventory);
    debug!(items = inventory.len(), load, "packed inventory");

    Ok(Hero {
        seed,
        name: name.clone(),
        gender,
        race,
        class,
        level: START_LEVEL,
        xp: 0,
        traits,
        combat,
        knowledge,
        resistances,
        spellcasting,
        hp_mod,
        max_hp,
        current_hp: max_hp,
        physique,
        ap,
        non_lethal,
        speed,
        armor_class,
        ac_magic: 0,
        purse,
        thief_skills,
        race_skills,
        occupation,
        inventory,
        load,
        diagnostics,
    })
}

/// Starting purse; an out-of-band roll is kept and noted in `diagnostics`
fn fill_purse(
    class: HeroClass,
    formula: GoldFormula,
    rng: &mut HeroRng,
    diagnostics: &mut Vec<Diagnostic>,
) -> Purse {
    let (gold, diag) = derive::roll_gold_with(class, formula, rng);
    if let Some(diag) = diag {
        warn!(%diag, "gold roll outside expected band");
        diagnostics.push(diag);
    }
    Purse {
        in_hand: gold,
        banked: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_exact_names() {
        let input = HeroInput::parse("Falsoon", "male", "Human", "Fighter").unwrap();
        assert_eq!(
            input,
            HeroInput::new("Falsoon", Gender::Male, Race::Human, HeroClass::Fighter)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_race() {
        let err = HeroInput::parse("Falsoon", "male", "Orc", "Fighter").unwrap_err();
        assert!(matches!(
            err,
            ChargenError::Unrecognized { kind: "race", ref value, .. } if value == "Orc"
        ));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(HeroInput::parse("x", "Male", "Human", "Fighter").is_err());
        assert!(HeroInput::parse("x", "male", "human", "Fighter").is_err());
        assert!(HeroInput::parse("x", "male", "Human", "fighter").is_err());
    }

    #[test]
    fn test_generate_is_reproducible() {
        let input = HeroInput::new("Zed", Gender::Female, Race::HalfElf, HeroClass::Wizard);
        let a = generate(&input, &mut HeroRng::new(42)).unwrap();
        let b = generate(&input, &mut HeroRng::new(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_fills_starting_state() {
        let input = HeroInput::new("Zed", Gender::Male, Race::Gnome, HeroClass::Thief);
        let hero = generate(&input, &mut HeroRng::new(42)).unwrap();
        assert_eq!(hero.level, 1);
        assert_eq!(hero.xp, 0);
        assert_eq!(hero.current_hp, hero.max_hp);
        assert_eq!(hero.purse.banked, 0);
        assert_eq!(hero.thief_skills.len(), 8);
        assert!(hero.spellcasting.is_none());
        assert_eq!(hero.knowledge.languages, vec!["Common", "Gnomen"]);
    }

    #[test]
    fn test_purse_keeps_out_of_band_gold() {
        let formula = GoldFormula {
            dice: 2,
            sides: 6,
            min: 0,
            max: 10,
        };
        let mut diagnostics = Vec::new();
        let purse = fill_purse(
            HeroClass::Wizard,
            formula,
            &mut HeroRng::new(5),
            &mut diagnostics,
        );
        assert!((20..=120).contains(&purse.in_hand));
        assert_eq!(purse.banked, 0);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::GoldOutOfBand {
                class: HeroClass::Wizard,
                gold: purse.in_hand,
                min: 0,
                max: 10,
            }]
        );
    }

    #[test]
    fn test_purse_in_band_adds_nothing() {
        let mut diagnostics = Vec::new();
        let purse = fill_purse(
            HeroClass::Fighter,
            class::gold_formula(HeroClass::Fighter),
            &mut HeroRng::new(5),
            &mut diagnostics,
        );
        assert!((50..=200).contains(&purse.in_hand));
        assert!(diagnostics.is_empty());
    }
}
