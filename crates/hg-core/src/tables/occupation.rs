//! Prior occupations and what each one grants
//!
//! Every hero is assigned one occupation at random. The rule for an
//! occupation is pure data: skills it always grants, skill groups gated on
//! traits, an optional tool kit, and an optional remark.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::consts::SKILL_GATE;
use crate::hero::{Item, Trait, Traits};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, IntoStaticStr,
)]
pub enum Occupation {
    Academic,
    Acrobat,
    Alchemist,
    Apothecary,
    Armorer,
    Banker,
    Bowyer,
    Carpenter,
    Farmer,
    Fisher,
    Forester,
    Freighter,
    Gambler,
    Hunter,
    Husbandman,
    Innkeeper,
    Jeweler,
    Leatherworker,
    Painter,
    Mason,
    Miner,
    Navigator,
    Sailor,
    Shipwright,
    Tailor,
    Trader,
    Trapper,
    Weaponsmith,
    Weaver,
    Woodworker,
    Drifter,
}

impl Occupation {
    /// Every occupation, in draw order
    pub const ALL: [Occupation; 31] = [
        Occupation::Academic,
        Occupation::Acrobat,
        Occupation::Alchemist,
        Occupation::Apothecary,
        Occupation::Armorer,
        Occupation::Banker,
        Occupation::Bowyer,
        Occupation::Carpenter,
        Occupation::Farmer,
        Occupation::Fisher,
        Occupation::Forester,
        Occupation::Freighter,
        Occupation::Gambler,
        Occupation::Hunter,
        Occupation::Husbandman,
        Occupation::Innkeeper,
        Occupation::Jeweler,
        Occupation::Leatherworker,
        Occupation::Painter,
        Occupation::Mason,
        Occupation::Miner,
        Occupation::Navigator,
        Occupation::Sailor,
        Occupation::Shipwright,
        Occupation::Tailor,
        Occupation::Trader,
        Occupation::Trapper,
        Occupation::Weaponsmith,
        Occupation::Weaver,
        Occupation::Woodworker,
        Occupation::Drifter,
    ];

    pub const fn rule(self) -> OccupationRule {
        occupation_rule(self)
    }
}

pub const ALCHEMISTS_KIT: Item = Item::new("Alchemists Kit (100 gp)", 40);
pub const LEATHERWORKING_KIT: Item = Item::new("Leatherworking Kit (50 gp)", 64);
pub const METALSMITH_KIT: Item = Item::new("Metalsmith Kit (50 gp)", 80);
pub const SEWING_KIT: Item = Item::new("Sewing Kit (30 gp)", 16);
pub const WOODWORKING_KIT: Item = Item::new("Woodworking Kit (50 gp)", 64);

/// Skills granted only when every listed trait exceeds its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub requires: &'static [(Trait, i8)],
    pub skills: &'static [&'static str],
}

impl Gate {
    pub fn is_open(&self, traits: &Traits) -> bool {
        self.requires
            .iter()
            .all(|&(t, threshold)| traits.get(t) > threshold)
    }
}

/// Flavor text attached to an occupation's skill list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    /// Listed first, whatever else is granted
    Always(&'static str),
    /// Listed only when the occupation granted no skill at all
    Fallback(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupationRule {
    pub description: &'static str,
    pub kit: Option<Item>,
    pub skills: &'static [&'static str],
    pub gates: &'static [Gate],
    pub remark: Option<Remark>,
}

impl OccupationRule {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            kit: None,
            skills: &[],
            gates: &[],
            remark: None,
        }
    }

    const fn kit(mut self, kit: Item) -> Self {
        self.kit = Some(kit);
        self
    }

    const fn skills(mut self, skills: &'static [&'static str]) -> Self {
        self.skills = skills;
        self
    }

    const fn gates(mut self, gates: &'static [Gate]) -> Self {
        self.gates = gates;
        self
    }

    const fn remark(mut self, remark: Remark) -> Self {
        self.remark = Some(remark);
        self
    }

    /// Every skill name this rule can ever grant
    pub fn referenced_skills(&self) -> impl Iterator<Item = &'static str> {
        self.skills
            .iter()
            .chain(self.gates.iter().flat_map(|g| g.skills.iter()))
            .copied()
    }
}

/// A single-trait gate at the usual threshold
macro_rules! gate {
    ($t:ident => [$($skill:literal),+ $(,)?]) => {
        Gate {
            requires: &[(Trait::$t, SKILL_GATE)],
            skills: &[$($skill),+],
        }
    };
}

const BANKER_GATE: i8 = SKILL_GATE + 1;

const NIMBLE_AND_CLEVER: &[(Trait, i8)] = &[
    (Trait::Dexterity, SKILL_GATE),
    (Trait::Intelligence, SKILL_GATE),
];

const STRONG_SWIMMER: &[Gate] = &[gate!(Strength => ["Fast Swim"])];

pub const fn occupation_rule(occupation: Occupation) -> OccupationRule {
    match occupation {
        Occupation::Academic => {
            OccupationRule::new("Knows diverse information, court politics and bureaucrats.")
                .gates(&[
                    gate!(Intelligence => ["General Knowledge", "Concentration"]),
                    Gate {
                        requires: &[
                            (Trait::Intelligence, SKILL_GATE),
                            (Trait::Charisma, SKILL_GATE),
                        ],
                        skills: &["Diplomacy"],
                    },
                ])
                .remark(Remark::Fallback("Too much book-learning. No practical skills."))
        }
        Occupation::Acrobat => OccupationRule::new("Acrobatic and aerial body control.")
            .gates(&[gate!(Dexterity => [
                "Climb Walls",
                "Balance",
                "Escape Artist",
                "Jump",
                "Tumble",
            ])])
            .remark(Remark::Fallback(
                "You'll break your neck. Don't try it in the dungeon.",
            )),
        Occupation::Alchemist => {
            OccupationRule::new("Knows chemicals and elixirs. Owns Alchemists' Kit.")
                .kit(ALCHEMISTS_KIT)
                .gates(&[gate!(Intelligence => ["Arcane Knowledge"])])
                .remark(Remark::Fallback(
                    "You'll blow yourself up. Don't try it even once.",
                ))
        }
        Occupation::Apothecary => OccupationRule::new(
            "Knows herbs, ointments, and medicines. Owns Alchemists' Kit.",
        )
        .kit(ALCHEMISTS_KIT)
        .gates(&[gate!(Wisdom => ["Natural Knowledge"])])
        .remark(Remark::Fallback(
            "One mistake and you'll poison yourself. Stick to aspirin.",
        )),
        Occupation::Armorer => OccupationRule::new(
            "Makes and repairs metal armor, helmets and shields. Owns Metalsmith Kit.",
        )
        .kit(METALSMITH_KIT)
        .skills(&["Repair Armor"]),
        Occupation::Banker => OccupationRule::new("You were a financial businessman.")
            .skills(&["Financial Brokering"])
            .gates(&[Gate {
                requires: &[(Trait::Intelligence, BANKER_GATE)],
                skills: &["Appraise Jewelry"],
            }]),
        Occupation::Bowyer => {
            OccupationRule::new("Can make bows and arrows. Owns Woodworking Kit.")
                .kit(WOODWORKING_KIT)
                .skills(&["Bowmaking"])
        }
        Occupation::Carpenter => OccupationRule::new(
            "Knows wood and woodworking tools. Owns Woodworking Kit.",
        )
        .kit(WOODWORKING_KIT)
        .skills(&["Find Secrets in Woodwork"]),
        Occupation::Farmer => OccupationRule::new("Knows plants, common herbs, greenery.")
            .skills(&["Identify Plants", "Predict Weather"]),
        Occupation::Fisher => OccupationRule::new(
            "Knows about bodies of fresh water and lakes. Owns Sewing Kit.",
        )
        .kit(SEWING_KIT)
        .skills(&["Netmaking"])
        .gates(STRONG_SWIMMER),
        Occupation::Forester => OccupationRule::new("Has natural knowledge in wooded areas.")
            .skills(&[
                "Hide in Shadows",
                "Move Silently",
                "Wilderness Lore",
                "Intuit Outdoor Direction",
                "Spot Details",
            ])
            .gates(STRONG_SWIMMER),
        Occupation::Freighter => OccupationRule::new(
            "Businessman. Ships cargo in wagons. Owns Woodworking Kit.",
        )
        .kit(WOODWORKING_KIT)
        .skills(&["Negotiations", "Cargo Transport"])
        .gates(&[gate!(Wisdom => ["Train Animals"])]),
        Occupation::Gambler => OccupationRule::new("Skilled in games of chance.").skills(&[
            "Luck",
            "Pick Pockets",
            "Open Locks",
            "Bluff",
            "Sense Motive",
        ]),
        Occupation::Hunter => OccupationRule::new("Tracks and kills wild animals for food")
            .skills(&[
                "Hunting",
                "Find/Set Traps",
                "Move Silently",
                "Hide in Shadows",
                "Spot Details",
            ])
            .gates(&[
                gate!(Charisma => ["Intimidate"]),
                gate!(Constitution => ["Listening"]),
            ]),
        Occupation::Husbandman => OccupationRule::new(
            "Knows livestock of all kinds (horses, sheep, cattle, pigs)",
        )
        .skills(&["Husbandry"])
        .gates(&[gate!(Wisdom => ["Animal Empathy", "Train Animals"])]),
        Occupation::Innkeeper => OccupationRule::new(
            "Businessman. Runs crowded places, people-oriented, business-savvy",
        )
        .skills(&["Negotiations", "Sense Motive"])
        .gates(&[
            gate!(Charisma => ["Gather Information"]),
            gate!(Intelligence => ["Read Lips"]),
        ]),
        Occupation::Jeweler => OccupationRule::new(
            "Recognizes true value of gems, jewelry, etc. \
             Works intricate devices like a watchmaker.",
        )
        .skills(&["Appraise Jewelry"])
        .gates(&[gate!(Dexterity => ["Open Locks"])]),
        Occupation::Leatherworker => OccupationRule::new(
            "Tans hides and makes leather items, e.g. leather armor and boots. \
             Owns Leatherworking Kit",
        )
        .kit(LEATHERWORKING_KIT)
        .skills(&["Leatherworking"]),
        Occupation::Painter => OccupationRule::new("Paints buildings and mixes paint.")
            .skills(&["Painting"])
            .gates(&[gate!(Charisma => ["Gather Information"])]),
        Occupation::Mason => OccupationRule::new(
            "Constructs buildings, works mortar, lays brick; knows stonework.",
        )
        .gates(&[gate!(Intelligence => ["Find Secrets in Stonework"])])
        .remark(Remark::Always(
            "You're especially good at putting your finger in a dike",
        )),
        Occupation::Miner => {
            OccupationRule::new("Digs ores from caverns and mines. Know rock and ores")
                .skills(&["Intuit Underground Direction", "Cavern Lore"])
                .gates(&[gate!(Intelligence => ["Find Secrets in Stonework"])])
        }
        Occupation::Navigator => OccupationRule::new(
            "Knows direction at sea, plots water course without getting lost",
        )
        .skills(&[
            "Predict Weather",
            "Water Lore",
            "Intuit Outdoor Direction",
            "Spot Details",
        ])
        .gates(STRONG_SWIMMER),
        Occupation::Sailor => {
            OccupationRule::new("Knows ships, has knowledge of bodies of water.")
                .skills(&["Make Raft"])
                .gates(STRONG_SWIMMER)
        }
        Occupation::Shipwright => {
            OccupationRule::new("Builds ships, knows wood and wood-working tools.")
                .skills(&["Make Raft"])
                .gates(STRONG_SWIMMER)
        }
        Occupation::Tailor => OccupationRule::new("Makes clothing, knows dyes. Owns Sewing Kit")
            .kit(SEWING_KIT)
            .skills(&["Sewing"])
            .gates(&[gate!(Charisma => ["Gather Information"])]),
        Occupation::Trader => OccupationRule::new("Businessman. Familar with transport equipment.")
            .skills(&["Financial Brokering", "Sense Motive"])
            .gates(&[gate!(Charisma => ["Diplomacy"])]),
        Occupation::Trapper => OccupationRule::new("Catches animals for tanning or money.")
            .skills(&[
                "Trapping",
                "Find/Set Traps",
                "Move Silently",
                "Open Locks",
                "Hide in Shadows",
                "Spot Details",
                "Wilderness Lore",
            ])
            .gates(&[Gate {
                requires: NIMBLE_AND_CLEVER,
                skills: &["Disable Device Skill"],
            }]),
        Occupation::Weaponsmith => OccupationRule::new(
            "Knows metal weapons of all types and metalworking. Owns Metalsmith Kit.",
        )
        .kit(METALSMITH_KIT)
        .skills(&["Make Weapons"]),
        Occupation::Weaver => {
            OccupationRule::new("Makes tapestries, rugs, bed clothing. Knows dyes.")
                .skills(&["Appraise Tapestries"])
        }
        Occupation::Woodworker => OccupationRule::new(
            "Builds wood furniture, cabinets. Knows wood and wood-working tools. \
             Owns Woodworking Kit.",
        )
        .kit(WOODWORKING_KIT)
        .skills(&["Woodworking", "Find Secrets in Woodwork"])
        .gates(&[Gate {
            requires: NIMBLE_AND_CLEVER,
            skills: &["Disable Device Skill"],
        }]),
        Occupation::Drifter => {
            OccupationRule::new("Everyone is running from something. What is your story?")
                .remark(Remark::Always("No special skills"))
        }
    }
}
