//! Generation errors and diagnostics
//!
//! Errors abort the run; diagnostics ride along on the finished hero.

use serde::Serialize;
use thiserror::Error;

use crate::hero::HeroClass;

/// Errors that stop hero generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChargenError {
    #[error("unrecognized {kind} '{value}' (lookup in {table})")]
    Unrecognized {
        kind: &'static str,
        value: String,
        table: &'static str,
    },

    #[error("table '{table}' has {found} entries, expected {expected}")]
    TableMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("occupation {occupation} refers to skill '{skill}' missing from the skill catalog")]
    UnknownSkill {
        occupation: &'static str,
        skill: &'static str,
    },

    #[error("skill '{skill}' appears more than once in the skill catalog")]
    DuplicateSkill { skill: &'static str },
}

impl ChargenError {
    pub(crate) fn unrecognized(kind: &'static str, value: &str, table: &'static str) -> Self {
        ChargenError::Unrecognized {
            kind,
            value: value.to_string(),
            table,
        }
    }
}

/// A value that was kept but falls outside what the rule tables allow for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    GoldOutOfBand {
        class: HeroClass,
        gold: u32,
        min: u32,
        max: u32,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::GoldOutOfBand {
                class,
                gold,
                min,
                max,
            } => write!(
                f,
                "{class} gold roll {gold} outside expected range {min}..={max}"
            ),
        }
    }
}
