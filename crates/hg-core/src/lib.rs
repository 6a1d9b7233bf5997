//! hg-core: Hero generation for a fantasy tabletop game
//!
//! Rolls prime traits, derives every dependent statistic from the rule
//! tables, and assembles skills and gear into a finished [`Hero`].
//! No I/O happens here; callers supply the input and the dice.

pub mod chargen;
pub mod consts;
pub mod error;
pub mod hero;
pub mod rng;
pub mod tables;

pub use chargen::{HeroInput, generate};
pub use error::{ChargenError, Diagnostic};
pub use hero::{Gender, Hero, HeroClass, Race, Trait, Traits};
pub use rng::HeroRng;
