//! Attribute derivation
//!
//! Dependent statistics computed from the final traits. Most of these are
//! pure table lookups; the few that roll take the generator explicitly.

use crate::consts::{
    BASE_AC, COMMON_TONGUE, GOLD_MULTIPLIER, HIGH_BAND_MIN, LOW_BAND_MAX, READ_MAGIC,
    SPEED_BASE_BLOCKS, SPEED_THRESHOLDS, UNCHOSEN_SPELL,
};
use crate::error::Diagnostic;
use crate::hero::{
    CombatMods, Gender, HeroClass, Literacy, NonLethal, Race, Resistances, Spellcasting, Trait,
    Traits, range_modifier,
};
use crate::rng::HeroRng;
use crate::tables::class::{self, CLERIC_SPELLS, GoldFormula};
use crate::tables::race::{self, BodyDistribution, RacialTongue};
use crate::tables::strength::strength_row;

/// Melee and missile modifiers from STR and DEX
pub fn combat_mods(traits: &Traits) -> CombatMods {
    let row = strength_row(traits.get(Trait::Strength));
    let dex_mod = range_modifier(traits.get(Trait::Dexterity));
    CombatMods {
        to_hit_melee: row.to_hit,
        damage: row.damage,
        weight_allowance: row.weight_allowance,
        to_hit_missile: dex_mod,
        ac_mod: dex_mod,
    }
}

/// Common plus whatever the race speaks
pub fn languages(race: Race, rng: &mut HeroRng) -> Vec<&'static str> {
    let mut langs = vec![COMMON_TONGUE];
    match race::racial_tongue(race) {
        RacialTongue::None => {}
        RacialTongue::Always(tongue) => langs.push(tongue),
        RacialTongue::HalfChance(tongue) => {
            if rng.percentile() >= 50 {
                langs.push(tongue);
            }
        }
    }
    langs
}

/// Further languages the hero can learn; always at least one
pub fn max_languages(intelligence: i8) -> i32 {
    (i32::from(intelligence) / 2 - 3).max(1)
}

pub fn literacy(intelligence: i8, class: HeroClass) -> Literacy {
    if class.is_lettered() {
        return Literacy::ReadWrite;
    }
    match intelligence {
        ..=10 => Literacy::Illiterate,
        11 => Literacy::ReadOnly,
        12.. => Literacy::ReadWrite,
    }
}

/// Wizard spell points, learning chance, and starting spellbook
pub fn wizard_casting(intelligence: i8) -> Spellcasting {
    let int = i32::from(intelligence);
    let points_per_level = int / 2 - 3;
    let extra = usize::try_from(points_per_level - 1).unwrap_or(0);
    let mut spellbook = Vec::with_capacity(extra + 1);
    spellbook.push(READ_MAGIC);
    spellbook.extend(std::iter::repeat_n(UNCHOSEN_SPELL, extra));
    Spellcasting::Wizard {
        points_per_level,
        spell_points: points_per_level,
        percent_to_learn: int * 5,
        spellbook,
    }
}

/// Cleric turning, spell points, and the fixed first-level spell list
pub fn cleric_casting(wisdom: i8) -> Spellcasting {
    let wis = i32::from(wisdom);
    Spellcasting::Cleric {
        turn_undead: wis,
        points_per_level: wis / 2,
        spell_points: wis / 2,
        spells: CLERIC_SPELLS.to_vec(),
    }
}

pub fn spellcasting(class: HeroClass, traits: &Traits) -> Option<Spellcasting> {
    match class {
        HeroClass::Wizard => Some(wizard_casting(traits.get(Trait::Intelligence))),
        HeroClass::Cleric => Some(cleric_casting(traits.get(Trait::Wisdom))),
        HeroClass::Fighter | HeroClass::Thief => None,
    }
}

/// `CON / 3.5`, rounded half up
fn hardy_bonus(constitution: i8) -> i32 {
    (4 * i32::from(constitution) + 7) / 14
}

pub fn resistances(race: Race, traits: &Traits) -> Resistances {
    let magic_attack = range_modifier(traits.get(Trait::Wisdom));
    if !race.has_hardy_constitution() {
        return Resistances { magic_attack, ..Resistances::default() };
    }
    let bonus = hardy_bonus(traits.get(Trait::Constitution));
    Resistances {
        magic_attack,
        racial_magic: bonus + magic_attack,
        racial_poison: bonus,
    }
}

/// Which part of the distribution a body measure falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    pub fn from_percentile(roll: u32) -> Self {
        if roll <= LOW_BAND_MAX {
            Band::Low
        } else if roll > HIGH_BAND_MIN {
            Band::High
        } else {
            Band::Mid
        }
    }
}

/// Roll a height or weight from its racial distribution
pub fn roll_body(dist: &BodyDistribution, gender: Gender, rng: &mut HeroRng) -> u32 {
    let average = dist.average(gender);
    match Band::from_percentile(rng.percentile()) {
        Band::Low => average.saturating_sub(rng.roll_sum(dist.lo_dice, dist.lo_sides)),
        Band::Mid => average,
        Band::High => average + rng.roll_sum(dist.hi_dice, dist.hi_sides),
    }
}

/// Two hit dice plus the CON modifier
pub fn roll_hit_points(class: HeroClass, hp_mod: i32, rng: &mut HeroRng) -> i32 {
    let die = class::hit_die(class);
    let rolled = rng.roll_die(die) + rng.roll_die(die);
    i32::try_from(rolled).unwrap_or(i32::MAX) + hp_mod
}

pub fn non_lethal(ap: i32, weight: u32, combat: &CombatMods) -> NonLethal {
    let weight_bonus = i32::try_from(weight / 25).unwrap_or(i32::MAX);
    let grappling = ap + combat.damage;
    NonLethal {
        overbearing: ap + weight_bonus,
        grappling,
        pummeling: grappling + combat.to_hit_missile,
        shield_bash: 0,
    }
}

/// Movement blocks per round for the given AP
pub fn speed(ap: i32) -> u32 {
    let band = SPEED_THRESHOLDS
        .iter()
        .position(|&limit| ap <= limit)
        .unwrap_or(SPEED_THRESHOLDS.len() - 1);
    SPEED_BASE_BLOCKS + band as u32
}

pub fn armor_class(combat: &CombatMods) -> i32 {
    BASE_AC + combat.ac_mod
}

/// Starting gold from `formula`
///
/// A result outside the formula's band is kept and comes back with a
/// diagnostic.
pub fn roll_gold_with(
    class: HeroClass,
    formula: GoldFormula,
    rng: &mut HeroRng,
) -> (u32, Option<Diagnostic>) {
    let gold = rng.roll_sum(formula.dice, formula.sides) * GOLD_MULTIPLIER;
    let diag = (!(formula.min..=formula.max).contains(&gold)).then_some(
        Diagnostic::GoldOutOfBand {
            class,
            gold,
            min: formula.min,
            max: formula.max,
        },
    );
    (gold, diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_speed_bands() {
        assert_eq!(speed(15), 2);
        assert_eq!(speed(16), 3);
        assert_eq!(speed(23), 3);
        assert_eq!(speed(24), 4);
        assert_eq!(speed(32), 4);
        assert_eq!(speed(33), 5);
        assert_eq!(speed(99), 5);
    }

    #[test]
    fn test_max_languages_floor() {
        assert_eq!(max_languages(7), 1);
        assert_eq!(max_languages(9), 1);
        assert_eq!(max_languages(10), 2);
        assert_eq!(max_languages(18), 6);
    }

    #[test]
    fn test_literacy() {
        assert_eq!(literacy(10, HeroClass::Fighter), Literacy::Illiterate);
        assert_eq!(literacy(11, HeroClass::Thief), Literacy::ReadOnly);
        assert_eq!(literacy(12, HeroClass::Fighter), Literacy::ReadWrite);
        assert_eq!(literacy(8, HeroClass::Wizard), Literacy::ReadWrite);
        assert_eq!(literacy(8, HeroClass::Cleric), Literacy::ReadWrite);
    }

    #[test]
    fn test_wizard_casting() {
        match wizard_casting(17) {
            Spellcasting::Wizard {
                points_per_level,
                spell_points,
                percent_to_learn,
                spellbook,
            } => {
                assert_eq!(points_per_level, 5);
                assert_eq!(spell_points, 5);
                assert_eq!(percent_to_learn, 85);
                assert_eq!(spellbook.len(), 5);
                assert_eq!(spellbook[0], READ_MAGIC);
                assert!(spellbook[1..].iter().all(|s| *s == UNCHOSEN_SPELL));
            }
            other => panic!("expected wizard casting, got {other:?}"),
        }
    }

    #[test]
    fn test_dim_wizard_still_reads_magic() {
        let casting = wizard_casting(7);
        assert_eq!(casting.spells(), &[READ_MAGIC]);
        assert_eq!(casting.spell_points(), 0);
    }

    #[test]
    fn test_cleric_casting() {
        match cleric_casting(15) {
            Spellcasting::Cleric {
                turn_undead,
                points_per_level,
                spell_points,
                spells,
            } => {
                assert_eq!(turn_undead, 15);
                assert_eq!(points_per_level, 7);
                assert_eq!(spell_points, 7);
                assert_eq!(spells.len(), 12);
            }
            other => panic!("expected cleric casting, got {other:?}"),
        }
    }

    #[test]
    fn test_hardy_bonus_rounds_half_up() {
        assert_eq!(hardy_bonus(7), 2);
        assert_eq!(hardy_bonus(9), 3);
        assert_eq!(hardy_bonus(12), 3);
        assert_eq!(hardy_bonus(14), 4);
        assert_eq!(hardy_bonus(16), 5);
        assert_eq!(hardy_bonus(19), 5);
    }

    #[test]
    fn test_dwarf_resistances() {
        let traits = Traits::new([12, 10, 16, 10, 16, 10]);
        let res = resistances(Race::Dwarf, &traits);
        assert_eq!(res.magic_attack, 2);
        assert_eq!(res.racial_poison, 5);
        assert_eq!(res.racial_magic, 7);

        let human = resistances(Race::Human, &traits);
        assert_eq!(human.racial_magic, 0);
        assert_eq!(human.racial_poison, 0);
        assert_eq!(human.magic_attack, 2);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(Band::from_percentile(1), Band::Low);
        assert_eq!(Band::from_percentile(30), Band::Low);
        assert_eq!(Band::from_percentile(31), Band::Mid);
        assert_eq!(Band::from_percentile(70), Band::Mid);
        assert_eq!(Band::from_percentile(71), Band::High);
    }

    #[test]
    fn test_body_stays_within_dice_reach() {
        let mut rng = HeroRng::new(42);
        for r in Race::iter() {
            let dist = race::height_table(r);
            for _ in 0..500 {
                let h = roll_body(&dist, Gender::Male, &mut rng);
                assert!(h >= dist.male_avg - dist.lo_dice * dist.lo_sides);
                assert!(h <= dist.male_avg + dist.hi_dice * dist.hi_sides);
            }
        }
    }

    #[test]
    fn test_non_lethal() {
        let combat = CombatMods {
            damage: 1,
            to_hit_missile: 2,
            ..CombatMods::default()
        };
        let nl = non_lethal(30, 180, &combat);
        assert_eq!(nl.overbearing, 37);
        assert_eq!(nl.grappling, 31);
        assert_eq!(nl.pummeling, 33);
        assert_eq!(nl.shield_bash, 0);
    }

    #[test]
    fn test_gold_always_in_band() {
        let mut rng = HeroRng::new(42);
        for class in HeroClass::iter() {
            for _ in 0..500 {
                let (gold, diag) = roll_gold_with(class, class::gold_formula(class), &mut rng);
                assert!(diag.is_none(), "{class} rolled {gold}");
                assert_eq!(gold % GOLD_MULTIPLIER, 0);
            }
        }
    }

    #[test]
    fn test_gold_outside_band_is_kept_and_reported() {
        // 2d6 * 10 always lands in 20..=120
        let narrow = GoldFormula {
            dice: 2,
            sides: 6,
            min: 0,
            max: 10,
        };
        let mut rng = HeroRng::new(9);
        for _ in 0..200 {
            let (gold, diag) = roll_gold_with(HeroClass::Thief, narrow, &mut rng);
            assert!((20..=120).contains(&gold));
            assert_eq!(
                diag,
                Some(Diagnostic::GoldOutOfBand {
                    class: HeroClass::Thief,
                    gold,
                    min: 0,
                    max: 10,
                })
            );
        }
    }

    #[test]
    fn test_gold_inside_band_has_no_diagnostic() {
        let exact = GoldFormula {
            dice: 1,
            sides: 1,
            min: 10,
            max: 10,
        };
        let (gold, diag) = roll_gold_with(HeroClass::Cleric, exact, &mut HeroRng::new(1));
        assert_eq!(gold, 10);
        assert!(diag.is_none());
    }

    #[test]
    fn test_hit_points_range() {
        let mut rng = HeroRng::new(3);
        for _ in 0..500 {
            let hp = roll_hit_points(HeroClass::Fighter, -1, &mut rng);
            assert!((1..=19).contains(&hp));
        }
    }
}
