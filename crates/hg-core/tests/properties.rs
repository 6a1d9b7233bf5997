//! Property checks over seeds, races, classes and genders

use proptest::prelude::*;

use hg_core::hero::Spellcasting;
use hg_core::tables::race;
use hg_core::{Gender, HeroClass, HeroInput, HeroRng, Race, Trait, generate};

fn arb_race() -> impl Strategy<Value = Race> {
    prop_oneof![
        Just(Race::Dwarf),
        Just(Race::Elf),
        Just(Race::Gnome),
        Just(Race::HalfElf),
        Just(Race::HalfOrc),
        Just(Race::Hobbit),
        Just(Race::Human),
    ]
}

fn arb_class() -> impl Strategy<Value = HeroClass> {
    prop_oneof![
        Just(HeroClass::Fighter),
        Just(HeroClass::Cleric),
        Just(HeroClass::Thief),
        Just(HeroClass::Wizard),
    ]
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_input() -> impl Strategy<Value = HeroInput> {
    ("[A-Za-z]{1,12}", arb_gender(), arb_race(), arb_class())
        .prop_map(|(name, gender, race, class)| HeroInput::new(name, gender, race, class))
}

proptest! {
    #[test]
    fn generation_never_fails(input in arb_input(), seed in any::<u64>()) {
        prop_assert!(generate(&input, &mut HeroRng::new(seed)).is_ok());
    }

    #[test]
    fn same_seed_same_hero(input in arb_input(), seed in any::<u64>()) {
        let a = generate(&input, &mut HeroRng::new(seed)).unwrap();
        let b = generate(&input, &mut HeroRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn traits_within_bounds(input in arb_input(), seed in any::<u64>()) {
        let hero = generate(&input, &mut HeroRng::new(seed)).unwrap();
        let bounds = race::trait_bounds(input.race);
        for (t, v) in hero.traits.iter() {
            prop_assert!(v >= bounds.min[t.index()] && v <= bounds.max[t.index()]);
        }
    }

    #[test]
    fn only_casters_cast(input in arb_input(), seed in any::<u64>()) {
        let hero = generate(&input, &mut HeroRng::new(seed)).unwrap();
        match (input.class, &hero.spellcasting) {
            (HeroClass::Wizard, Some(Spellcasting::Wizard { spellbook, percent_to_learn, .. })) => {
                prop_assert_eq!(spellbook[0], "Read Magic");
                prop_assert_eq!(
                    *percent_to_learn,
                    i32::from(hero.traits.get(Trait::Intelligence)) * 5
                );
            }
            (HeroClass::Cleric, Some(Spellcasting::Cleric { .. })) => {}
            (HeroClass::Fighter | HeroClass::Thief, None) => {}
            (class, casting) => prop_assert!(false, "{class} got {casting:?}"),
        }
    }

    #[test]
    fn thief_skills_only_for_thieves(input in arb_input(), seed in any::<u64>()) {
        let hero = generate(&input, &mut HeroRng::new(seed)).unwrap();
        let expected = if input.class == HeroClass::Thief { 8 } else { 0 };
        prop_assert_eq!(hero.thief_skills.len(), expected);
    }

    #[test]
    fn load_matches_inventory(input in arb_input(), seed in any::<u64>()) {
        let hero = generate(&input, &mut HeroRng::new(seed)).unwrap();
        prop_assert_eq!(hero.load, hero.inventory.iter().map(|i| i.weight).sum::<u32>());
    }
}
