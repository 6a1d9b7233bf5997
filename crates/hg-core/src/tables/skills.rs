//! Occupational skill catalog
//!
//! Occupations grant skills by name; the catalog maps each name to its
//! description and is indexed once on first use.

use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::Serialize;

use crate::error::ChargenError;

/// One catalog entry: the headline effect plus any itemized uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillDescription {
    pub name: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

impl SkillDescription {
    const fn new(name: &'static str, summary: &'static str) -> Self {
        Self { name, summary, details: &[] }
    }

    const fn with_details(
        name: &'static str,
        summary: &'static str,
        details: &'static [&'static str],
    ) -> Self {
        Self { name, summary, details }
    }
}

pub(crate) static SKILL_TABLE: &[SkillDescription] = &[
    SkillDescription::new("Animal Empathy", "Can communicate emotionally with animals"),
    SkillDescription::new("Appraise Jewelry", "Estimate selling value of gems and jewelry"),
    SkillDescription::new("Appraise Tapestries", "Estimate selling value of tapestries"),
    SkillDescription::with_details(
        "Arcane Knowledge",
        "+1 INT to recognize things, substances, and potions",
        &[
            "Identify substances (2gp, 1hr)",
            "Identify potions (2gp 1hr)",
            "Make acid: half-pint, d4 dmg or dissolve metal (15gp, 1 hr in town only)",
            "Make weak explosive (2d6 dmg (5gp, 1hr)",
            "Make medium explosive (3d8 dmg (20gp, 4hr in town only)",
        ],
    ),
    SkillDescription::new("Balance", "+1 DEX for balancing tasks and saves"),
    SkillDescription::new(
        "Bluff",
        "+2 CHR if the lie is only a matter of luck that the listener believes you",
    ),
    SkillDescription::with_details(
        "Bowmaking",
        "in the field if proper materials available:",
        &[
            "make short bow (-1 to hit) (20 gp, 3 days)",
            "make arrows (-1 dmg), need 1 bird for feathers (1 gp per 3d4+2 per day)",
        ],
    ),
    SkillDescription::with_details(
        "Cargo Transport",
        "knows tack, harness, and transport equipment",
        &["Can repair wagons"],
    ),
    SkillDescription::with_details(
        "Cavern Lore",
        "+1 WIS to guide party through caverns without getting lost",
        &[
            "Can avoid natural cavern hazards",
            "Identify most rock ores, +1 INT on rarer ores",
            "Uses picks and shovels as +1, +1 weapons",
        ],
    ),
    SkillDescription::new("Climb Walls", "as a Level 1 Thief (%)"),
    SkillDescription::new(
        "Concentration",
        "+1 Save vs CON to avoid distraction (and spell interruption)",
    ),
    SkillDescription::new("Diplomacy", "+1 CHR for all political negotiating"),
    SkillDescription::with_details(
        "Disable Device Skill",
        "same as Remove Traps as Level 1 Thief (%)",
        &["Undo or jam wooden devices or traps at +1"],
    ),
    SkillDescription::new(
        "Escape Artist",
        "+1 DEX to slip from manacles, ropes, or through tight spaces",
    ),
    SkillDescription::with_details(
        "Fast Swim",
        "Gains +1 BM when moving in water or underwater (normal water penalty = BM/2)",
        &["Gets +4 Save when falling into water due to diving"],
    ),
    SkillDescription::with_details(
        "Financial Brokering",
        "+1 CHR when negotiating money deals",
        &["No fee banking", "Gets 10% discount on all transactions in town"],
    ),
    SkillDescription::new(
        "Find Secrets in Woodwork",
        "+10% chance to find secret doors in wall panels, cabinets, etc.",
    ),
    SkillDescription::new(
        "Find Secrets in Stonework",
        "+10% chance to find openings in stone construction, e.g. cavern walls, stone floors, fireplaces",
    ),
    SkillDescription::new(
        "Find/Set Traps",
        "for simple traps like snares and deadweights, as a Level 1 Thief (%)",
    ),
    SkillDescription::with_details(
        "Gather Information",
        "+2 CHR to hear rumor when in an inn or similarly crowded place",
        &["+2 CHR to find contact information for a key person"],
    ),
    SkillDescription::new("General Knowledge", "+1 INT on any general question on specific topic"),
    SkillDescription::new("Hide in Shadows", "as a Level 1 Thief (%)"),
    SkillDescription::new("Hunting", "20% chance of finding wild game"),
    SkillDescription::with_details(
        "Husbandry",
        "10% chance of catching live animals",
        &["From vet skills, heal d2 HP human dmg or Slow Poison. Needs herbs"],
    ),
    SkillDescription::new("Identify Plants", "+1 INT on rarer items"),
    SkillDescription::new("Intimidate", "+1 CHR to get info from a prison or backdown a bully"),
    SkillDescription::new(
        "Intuit Outdoor Direction",
        "+1 WIS to know direction of travel when outside",
    ),
    SkillDescription::new(
        "Intuit Underground Direction",
        "+1 WIS to know direction when underground",
    ),
    SkillDescription::new("Jump", "+2 AP for leaping chasms or reaching lower tree branches"),
    SkillDescription::with_details(
        "Leatherworking",
        "Makes leather armor (10gp, 3 days)",
        &["Makes boots of gloves (5gp, 1 day)"],
    ),
    SkillDescription::new("Listening", "as a Level 1 Thief (%)"),
    SkillDescription::with_details(
        "Luck",
        "Gets +1 on all Saves involving luck and risk taking",
        &["Gets +2 on all throws involving gaming luck"],
    ),
    SkillDescription::new("Make Raft", "Make a sailing raft. Needs hand axe (3 days)"),
    SkillDescription::with_details(
        "Make Weapons",
        "Can make small metal shield (12gp, 4hr)",
        &[
            "Make or repair small melee weapons (all at -1 to Hit, -1 dmg): dagger (5gp, 2hr); \
             battle axe (5gp, 2hr, need hand axe); spear (5gp, 2hr); short sword (no scabbard) (10gp, 1 day)",
            "Make or repair small missile weapons (all at -1 to Hit, -1 dmg): throwing axe \
             (5gp, 2hr, need hand axe); light xbow bolts (10sp, 15 min); heavy bolts (1gp, 30 min); \
             sling bullet or dart (1 gp per 3d6 bullets/4hrs)",
        ],
    ),
    SkillDescription::new("Move Silently", "as a Level 1 Thief (%)"),
    SkillDescription::with_details(
        "Natural Knowledge",
        "+1 WIS for biological or chemical question",
        &[
            "Identify substance (3gp, 1hr)",
            "Identify potion (3gp, 1hr)",
            "Detect poison in bottle or by symptoms of person (10gp, 1 hr)",
            "Detect potency and kind of poison after detection (20gp, 1 hr)",
            "Make weak medicinal potions (d4 healing) (10gp, 1 hr)",
            "Make medium medicinal potions (2d6 healing) (20gp, 4 hr in town only)",
            "Make weak poison (L1 poison)( (5gp, 1hr)",
            "Make medium poison (L2 poison)(40gp, 4hr in town only)",
        ],
    ),
    SkillDescription::new("Negotiations", "+1 CHR when negotiating money deals"),
    SkillDescription::new(
        "Netmaking",
        "Makes or repairs 10'x10' net that can provide 10d4 fish per day for food. Needs 50' rope (2 days)",
    ),
    SkillDescription::new("Open Locks", "as a Level 1 Thief (%)"),
    SkillDescription::new("Painting", "Paints buildings, mixes paint. (yep, that's it)."),
    SkillDescription::new("Pick Pockets", "as a Level 1 Thief (%)"),
    SkillDescription::new("Predict Weather", "Predict next day weather at +2 WIS"),
    SkillDescription::new(
        "Read Lips",
        "Can understand about 1 minute of speaker's speech if within 30' and knows the speaker's language",
    ),
    SkillDescription::with_details(
        "Repair Armor",
        "in the field if proper materials available:",
        &[
            "Make shield, small metal (10gp, 1 day) or small wooden (2 gp, 4 hr)",
            "Convert lantern from open (hooded) to bulls-eye lantern (10gp, 4hr)",
            "Make caltrop for 4 spikes (1go, 1hr)",
        ],
    ),
    SkillDescription::new("Sense Motive", "+1 WIS to determine if person is lying or bluffing"),
    SkillDescription::new(
        "Sewing",
        "Can make belt (1gp, 1hr), boots (5gp, 1 day), cloak (1gp, 1hr), hat (1gp, 1hr)",
    ),
    SkillDescription::new(
        "Spot Details",
        "+2 WIS to notice details such as ambushing bandits, obscure items in dim room, centipedes in pile of trash",
    ),
    SkillDescription::new("Train Animals", "Can train animals or work teams"),
    SkillDescription::new("Trapping", "Catch animals alive at 20%"),
    SkillDescription::with_details(
        "Tumble",
        "land softer when falling (reduce dmg by d3)",
        &["Dive tumble over opponents at +2 AC"],
    ),
    SkillDescription::new(
        "Water Lore",
        "+1 WIS to guide party through water areas and avoid natural hazards",
    ),
    SkillDescription::with_details(
        "Wilderness Lore",
        "Can guide party through badlands and avoid natural hazards",
        &[
            "Can navigate outdoor course without getting lost",
            "Can survive off the land",
        ],
    ),
    SkillDescription::with_details(
        "Woodworking",
        "Repair or make mods to wooden items, e.g. repair xbows (not bows),",
        &["Add secret compartments to chests"],
    ),
];

/// Name-indexed view of the skill table
#[derive(Debug)]
pub struct SkillCatalog {
    by_name: HashMap<&'static str, &'static SkillDescription>,
}

impl SkillCatalog {
    /// Index a table of skills, refusing duplicate names
    pub fn build(table: &'static [SkillDescription]) -> Result<Self, ChargenError> {
        let mut by_name = HashMap::with_capacity(table.len());
        for skill in table {
            if by_name.insert(skill.name, skill).is_some() {
                return Err(ChargenError::DuplicateSkill { skill: skill.name });
            }
        }
        Ok(Self { by_name })
    }

    pub fn get(&self, name: &str) -> Option<&'static SkillDescription> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

static CATALOG: LazyLock<Result<SkillCatalog, ChargenError>> =
    LazyLock::new(|| SkillCatalog::build(SKILL_TABLE));

/// The shared skill catalog
pub fn skill_catalog() -> Result<&'static SkillCatalog, ChargenError> {
    CATALOG.as_ref().map_err(Clone::clone)
}
