//! Unit header model.
//!
//! Every unit carries a `header.yml` at its top level describing what it is.
//! The `type` and `id` fields are required for installation; games
//! additionally name the boot runtime they need via `boot`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::InstallDirs;

/// Role of a unit, deciding which builtin directory it installs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Game,
    Boot,
    Agent,
}

impl UnitType {
    /// The builtin install directory for this unit type.
    pub fn builtin_dir<'a>(&self, dirs: &'a InstallDirs) -> &'a Path {
        match self {
            UnitType::Game => &dirs.games,
            UnitType::Boot => &dirs.boots,
            UnitType::Agent => &dirs.agents,
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitType::Game => write!(f, "game"),
            UnitType::Boot => write!(f, "boot"),
            UnitType::Agent => write!(f, "agent"),
        }
    }
}

/// Parsed content of a unit's `header.yml`.
///
/// Fields are optional at parse time; callers that install a unit validate
/// `unit_type` and `id` and raise `InvalidHeader` when they are missing.
/// Unknown fields are payload metadata and are carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    /// Role of the unit.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,

    /// Canonical id of the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id or path of the boot runtime required before launch (games only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot: Option<String>,

    /// Remaining header fields, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

impl Header {
    /// Parse a header from YAML text.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
