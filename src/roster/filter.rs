//! Filter engine: the unconditional visibility cut, then user-chosen
//! alignment/faction/search predicates over the resolved roster. Pure, total,
//! order-preserving.

use crate::data::model::{Alignment, Hero};
use crate::roster::alignment::ResolvedHero;

/// Placeholder record in the feed, never browsable.
const PLACEHOLDER_NAME: &str = "No Hero";

/// The browsable population: excludes solo-unavailable, auto-add-only,
/// placeholder, and hidden-stats heroes before any user filter applies.
pub fn visible(heroes: &[Hero]) -> Vec<&Hero> {
    heroes
        .iter()
        .filter(|hero| {
            !hero.unavailable_solo
                && !hero.auto_add_only
                && hero.name != PLACEHOLDER_NAME
                && !hero.hide_stats
        })
        .collect()
}

/// Alignment selector: everything, or one resolved alignment exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentFilter {
    #[default]
    All,
    Only(Alignment),
}

/// Faction selector: everything, or heroes with ANY membership (not just the
/// primary) in the named faction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FactionFilter {
    #[default]
    All,
    Named(String),
}

/// One grid query: three AND-combined predicates.
#[derive(Debug, Clone, Default)]
pub struct HeroQuery {
    pub alignment: AlignmentFilter,
    pub faction: FactionFilter,
    pub search: String,
}

impl HeroQuery {
    /// True when every predicate is a pass-through; the filter then returns
    /// the whole visible population.
    pub fn is_unfiltered(&self) -> bool {
        self.alignment == AlignmentFilter::All
            && self.faction == FactionFilter::All
            && self.search.trim().is_empty()
    }
}

/// Apply a query to the resolved roster. Never reorders; an empty result is a
/// valid answer, distinct from "not yet loaded" (which the caller guards).
pub fn filter_heroes<'a>(heroes: &'a [ResolvedHero], query: &HeroQuery) -> Vec<&'a ResolvedHero> {
    let term = query.search.trim().to_lowercase();

    heroes
        .iter()
        .filter(|resolved| {
            matches_alignment(resolved, query.alignment)
                && matches_faction(&resolved.hero, &query.faction)
                && matches_search(&resolved.hero, &term)
        })
        .collect()
}

fn matches_alignment(resolved: &ResolvedHero, filter: AlignmentFilter) -> bool {
    match filter {
        AlignmentFilter::All => true,
        AlignmentFilter::Only(alignment) => resolved.alignment == alignment,
    }
}

fn matches_faction(hero: &Hero, filter: &FactionFilter) -> bool {
    match filter {
        FactionFilter::All => true,
        FactionFilter::Named(name) => hero.factions.iter().any(|f| &f.name == name),
    }
}

/// Substring match on name, keywords, or special rules only. Wargear, heroic
/// actions, and magical-power names are deliberately not searched.
fn matches_search(hero: &Hero, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    hero.name.to_lowercase().contains(term)
        || hero.keywords.iter().any(|kw| kw.to_lowercase().contains(term))
        || hero
            .special_rules
            .iter()
            .any(|rule| rule.to_lowercase().contains(term))
}
