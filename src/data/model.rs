//! Game data model: factions and hero profiles as published in the upstream
//! JSON feed (camelCase keys). Parsed once per fetch, never mutated after.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Moral alignment of a faction or (derived) hero. `Neutral` never appears in
/// source faction data; it only arises when alignment resolution falls through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Good,
    Evil,
    Neutral,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Good => "good",
            Alignment::Evil => "evil",
            Alignment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stat the feed publishes as either a number or a string (e.g. fight "4/4+",
/// or a magical power range of "6"/18/null).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

/// A named army list with a declared alignment. `alignment` is optional so
/// parent inheritance has something to fill in for schema variants that omit
/// it; in the published feed every faction declares its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub name: String,
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub army_bonus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_faction: Option<String>,
}

/// A hero's membership in one faction. The first entry of a hero's list is the
/// primary faction and the only one used for alignment derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroFactionInfo {
    pub name: String,
    #[serde(default)]
    pub heroic_tier: String,
}

/// Display-only spell entry. No derived logic reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicalPower {
    pub name: String,
    #[serde(default)]
    pub range: Option<StatValue>,
    #[serde(default)]
    pub casting: u32,
}

/// A hero profile as published. Numeric stats are absent for units that do not
/// have them; list fields default to empty. Unknown keys in the feed (e.g.
/// `options`) are ignored on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fight: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoot: Option<StatValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub might: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fate: Option<u32>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub factions: Vec<HeroFactionInfo>,
    #[serde(default)]
    pub heroic_actions: Vec<String>,
    #[serde(default)]
    pub special_rules: Vec<String>,
    #[serde(default)]
    pub magical_powers: Vec<MagicalPower>,
    #[serde(default)]
    pub wargear: Vec<String>,
    #[serde(default)]
    pub unavailable_solo: bool,
    #[serde(default)]
    pub auto_add_only: bool,
    #[serde(default)]
    pub hide_stats: bool,
}

impl Hero {
    /// Name of the hero's primary faction (first membership entry), if any.
    pub fn primary_faction(&self) -> Option<&str> {
        self.factions.first().map(|f| f.name.as_str())
    }
}

/// The full fetched payload. Immutable for the session; a re-fetch replaces it
/// wholesale, never patches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    pub factions: Vec<Faction>,
    pub heroes: Vec<Hero>,
}
