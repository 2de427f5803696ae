use palantir::data::model::{Alignment, GameData};
use palantir::roster::{
    filter_heroes, visible, AlignmentFilter, FactionFilter, HeroQuery, Roster,
};
use serde_json::json;

fn sample_data() -> GameData {
    serde_json::from_value(json!({
        "factions": [
            {"name": "Gondor", "alignment": "good"},
            {"name": "Gondor Rangers", "alignment": "good", "parentFaction": "Gondor"},
            {"name": "Mordor", "alignment": "evil"},
        ],
        "heroes": [
            {
                "name": "Boromir",
                "points": 170,
                "keywords": ["Man", "Captain of the White Tower"],
                "specialRules": ["Horn of Gondor"],
                "wargear": ["Banner of Minas Tirith"],
                "factions": [
                    {"name": "Gondor", "heroicTier": "Hero of Valour"},
                    {"name": "Gondor Rangers", "heroicTier": "Hero of Valour"},
                ],
            },
            {
                "name": "Shagrat",
                "points": 90,
                "keywords": ["Orc"],
                "specialRules": ["Fury of the Uruk"],
                "factions": [{"name": "Mordor", "heroicTier": "Hero of Fortitude"}],
            },
            {
                "name": "Damrod",
                "points": 60,
                "keywords": ["Man", "Ranger"],
                "factions": [{"name": "Gondor Rangers", "heroicTier": "Minor Hero"}],
            },
        ],
    }))
    .expect("sample data should parse")
}

fn sample_roster() -> Roster {
    Roster::build(sample_data())
}

fn names(heroes: &[&palantir::roster::ResolvedHero]) -> Vec<String> {
    heroes.iter().map(|h| h.hero.name.clone()).collect()
}

#[test]
fn visible_excludes_each_unconditional_flag() {
    let data: GameData = serde_json::from_value(json!({
        "factions": [],
        "heroes": [
            {"name": "Plain Hero", "factions": []},
            {"name": "Solo Blocked", "unavailableSolo": true, "factions": []},
            {"name": "Auto Add", "autoAddOnly": true, "factions": []},
            {"name": "No Hero", "factions": [{"name": "Gondor", "heroicTier": ""}]},
            {"name": "Hidden", "hideStats": true, "factions": []},
        ],
    }))
    .expect("heroes fixture should parse");

    let population = visible(&data.heroes);
    let kept: Vec<_> = population.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(kept, vec!["Plain Hero"]);
}

#[test]
fn hidden_stats_excluded_regardless_of_other_fields() {
    let data: GameData = serde_json::from_value(json!({
        "factions": [{"name": "Gondor", "alignment": "good"}],
        "heroes": [{
            "name": "Fully Statted But Hidden",
            "points": 200,
            "movement": 6,
            "keywords": ["Man"],
            "hideStats": true,
            "factions": [{"name": "Gondor", "heroicTier": "Legendary"}],
        }],
    }))
    .expect("heroes fixture should parse");

    assert!(visible(&data.heroes).is_empty());
}

#[test]
fn unfiltered_query_returns_visible_population_in_order() {
    let roster = sample_roster();
    let query = HeroQuery::default();
    assert!(query.is_unfiltered());

    let result = filter_heroes(&roster.heroes, &query);
    assert_eq!(names(&result), vec!["Boromir", "Shagrat", "Damrod"]);
    assert_eq!(result.len(), roster.heroes.len());
}

#[test]
fn alignment_filter_matches_resolved_alignment_exactly() {
    let roster = sample_roster();

    let evil = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            alignment: AlignmentFilter::Only(Alignment::Evil),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&evil), vec!["Shagrat"]);

    // Damrod's faction inherits good from Gondor one hop up.
    let good = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            alignment: AlignmentFilter::Only(Alignment::Good),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&good), vec!["Boromir", "Damrod"]);
}

#[test]
fn faction_filter_matches_any_membership_not_just_primary() {
    let roster = sample_roster();
    let result = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            faction: FactionFilter::Named("Gondor Rangers".to_string()),
            ..HeroQuery::default()
        },
    );
    // Boromir's membership is secondary; it still counts.
    assert_eq!(names(&result), vec!["Boromir", "Damrod"]);
}

#[test]
fn faction_filter_excludes_non_members() {
    let roster = sample_roster();
    let result = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            faction: FactionFilter::Named("Rohan".to_string()),
            ..HeroQuery::default()
        },
    );
    assert!(result.is_empty());
}

#[test]
fn search_is_case_insensitive_on_name() {
    let roster = sample_roster();
    let result = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "BOR".to_string(),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&result), vec!["Boromir"]);
}

#[test]
fn search_matches_keywords_and_special_rules() {
    let roster = sample_roster();

    let by_keyword = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "ranger".to_string(),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&by_keyword), vec!["Damrod"]);

    let by_rule = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "fury of the".to_string(),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&by_rule), vec!["Shagrat"]);
}

#[test]
fn search_does_not_match_wargear() {
    let roster = sample_roster();
    // "Minas Tirith" appears only in Boromir's wargear.
    let result = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "minas tirith".to_string(),
            ..HeroQuery::default()
        },
    );
    assert!(result.is_empty());
}

#[test]
fn search_text_is_trimmed() {
    let roster = sample_roster();

    let blank = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "   ".to_string(),
            ..HeroQuery::default()
        },
    );
    assert_eq!(blank.len(), roster.heroes.len());

    let padded = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            search: "  bor  ".to_string(),
            ..HeroQuery::default()
        },
    );
    assert_eq!(names(&padded), vec!["Boromir"]);
}

#[test]
fn predicates_are_and_combined() {
    let roster = sample_roster();
    // Boromir matches the search but not the alignment.
    let result = filter_heroes(
        &roster.heroes,
        &HeroQuery {
            alignment: AlignmentFilter::Only(Alignment::Evil),
            search: "bor".to_string(),
            ..HeroQuery::default()
        },
    );
    assert!(result.is_empty());
}

#[test]
fn roster_collects_sorted_unique_faction_names() {
    let roster = sample_roster();
    assert_eq!(
        roster.faction_names,
        vec!["Gondor", "Gondor Rangers", "Mordor"]
    );
}
