//! Trait generator
//!
//! Rolls the six prime traits, hands the best roll to the class prime trait,
//! then applies race and gender adjustments and the race limits.

use tracing::debug;

use crate::consts::{NUM_TRAITS, ROLL_FLOOR, TRAIT_FLOOR};
use crate::hero::{Gender, HeroClass, Race, Traits};
use crate::rng::HeroRng;
use crate::tables::{class, race};

/// One trait: best three of four d6, never below the low gate
pub fn roll_trait(rng: &mut HeroRng) -> i8 {
    let roll = rng.roll_best_of_four(6);
    // best of four d6 is at most 18
    i8::try_from(roll).unwrap_or(i8::MAX).max(ROLL_FLOOR)
}

/// Six raw rolls in sheet order
pub fn roll_raw_traits(rng: &mut HeroRng) -> Traits {
    let values: [i8; NUM_TRAITS] = std::array::from_fn(|_| roll_trait(rng));
    Traits::new(values)
}

/// Move the first highest roll into the class prime trait
pub fn favor_prime(traits: &mut Traits, class: HeroClass) {
    let best = traits.highest();
    traits.swap(class::prime_trait(class), best);
}

pub fn apply_race(traits: &mut Traits, race: Race) {
    for &(t, delta) in race::trait_adjustments(race) {
        traits.modify(t, delta);
    }
}

pub fn apply_gender(traits: &mut Traits, gender: Gender) {
    for &(t, delta) in race::gender_adjustments(gender) {
        traits.modify(t, delta);
    }
}

/// Pull every trait into the race limits, and never below the global floor
pub fn limit_to_race(traits: &mut Traits, race: Race) {
    let bounds = race::trait_bounds(race);
    traits.clamp_to(&bounds.min, &bounds.max);
    traits.raise_to(TRAIT_FLOOR);
}

/// Full trait generation for a hero
pub fn generate_traits(
    rng: &mut HeroRng,
    gender: Gender,
    race: Race,
    class: HeroClass,
) -> Traits {
    let mut traits = roll_raw_traits(rng);
    debug!(raw = ?traits.values(), "rolled traits");

    favor_prime(&mut traits, class);
    apply_race(&mut traits, race);
    apply_gender(&mut traits, gender);
    limit_to_race(&mut traits, race);

    debug!(final_traits = ?traits.values(), %race, %class, %gender, "adjusted traits");
    traits
}
