//! Derived browsing state for one fetched dataset: the visible hero list
//! stamped with resolved alignments, plus the faction names for the filter
//! dropdown. Rebuilt from scratch whenever the dataset is replaced.

pub mod alignment;
pub mod filter;

use std::collections::BTreeSet;

pub use alignment::{resolve_alignments, stamp_hero, ResolvedHero};
pub use filter::{filter_heroes, visible, AlignmentFilter, FactionFilter, HeroQuery};

use crate::data::model::GameData;

/// The browsable population derived from one [GameData]. Owns the raw data so
/// the session holds exactly one copy; derived values are never cached across
/// dataset replacements.
#[derive(Debug, Clone)]
pub struct Roster {
    pub data: GameData,
    /// Visible heroes, stamped, in feed order.
    pub heroes: Vec<ResolvedHero>,
    /// Unique faction names, sorted for display.
    pub faction_names: Vec<String>,
}

impl Roster {
    pub fn build(data: GameData) -> Self {
        let alignments = resolve_alignments(&data.factions);
        let heroes = visible(&data.heroes)
            .into_iter()
            .map(|hero| stamp_hero(hero, &alignments))
            .collect();
        let faction_names: Vec<String> = data
            .factions
            .iter()
            .map(|f| f.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Roster {
            data,
            heroes,
            faction_names,
        }
    }
}
