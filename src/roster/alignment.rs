//! Alignment resolution: map faction names to alignments (own declaration
//! first, then one hop of parent inheritance) and stamp heroes with the
//! alignment of their primary faction.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::model::{Alignment, Faction, Hero};

/// A hero plus its derived alignment. Produced by [stamp_hero]; the raw
/// fetched record is never mutated. Serializes as the hero fields plus an
/// `alignment` key, the shape the grid consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedHero {
    #[serde(flatten)]
    pub hero: Hero,
    pub alignment: Alignment,
}

/// Build the faction-name -> alignment map.
///
/// Declared alignments win. A faction with no declared alignment but a
/// `parentFaction` inherits the parent's *declared* alignment — exactly one
/// hop, independent of input order; a grandparent chain is never walked.
/// Names that end up absent fall back to neutral at stamping time.
pub fn resolve_alignments(factions: &[Faction]) -> HashMap<String, Alignment> {
    let mut declared: HashMap<String, Alignment> = HashMap::new();
    for faction in factions {
        if let Some(alignment) = faction.alignment {
            declared.insert(faction.name.clone(), alignment);
        }
    }

    let mut resolved = declared.clone();
    for faction in factions {
        if resolved.contains_key(&faction.name) {
            continue;
        }
        let Some(parent) = faction.parent_faction.as_deref() else {
            continue;
        };
        // Lookup against the declared set, not the map under construction,
        // keeps inheritance to a single hop.
        if let Some(&alignment) = declared.get(parent) {
            resolved.insert(faction.name.clone(), alignment);
        }
    }

    resolved
}

/// Stamp one hero with its resolved alignment. Primary faction is the first
/// membership entry; an empty factions list or an unknown name resolves to
/// neutral.
pub fn stamp_hero(hero: &Hero, alignments: &HashMap<String, Alignment>) -> ResolvedHero {
    let alignment = hero
        .primary_faction()
        .and_then(|name| alignments.get(name).copied())
        .unwrap_or(Alignment::Neutral);

    ResolvedHero {
        hero: hero.clone(),
        alignment,
    }
}
