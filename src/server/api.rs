//! JSON payload builders for the browsing API, plus query-string parsing for
//! the grid's filter controls.

use std::fmt;

use serde::Serialize;

use crate::data::model::Alignment;
use crate::roster::{filter_heroes, AlignmentFilter, FactionFilter, HeroQuery, Roster};
use crate::session::Session;

#[derive(Debug)]
pub enum HeroesPayloadError {
    /// Query string carried an unusable selector value.
    BadQuery(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for HeroesPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadQuery(msg) => write!(f, "{msg}"),
            Self::Serialize(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HeroesPayloadError {}

pub fn health_payload(session: &Session) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "palantir-api",
        "version": env!("CARGO_PKG_VERSION"),
        "data": session.status_label(),
    }))
}

#[derive(Debug, Serialize)]
struct StatusPayload {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fetched_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hero_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    faction_count: Option<usize>,
}

/// Session lifecycle as seen by the UI: status label plus whichever of
/// fetched_at/error/counts apply to the current state.
pub fn status_payload(session: &Session) -> Result<String, serde_json::Error> {
    let payload = StatusPayload {
        status: session.status_label(),
        fetched_at: session.fetched_at().map(|at| at.to_rfc3339()),
        error: session.error().map(str::to_string),
        hero_count: session.roster().map(|r| r.heroes.len()),
        faction_count: session.roster().map(|r| r.faction_names.len()),
    };
    serde_json::to_string_pretty(&payload)
}

pub fn factions_payload(roster: &Roster) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "factions": roster.faction_names,
    }))
}

#[derive(Debug, Serialize)]
struct HeroesPayload<'a> {
    status: &'static str,
    /// Size of the whole visible population, for "showing N of M".
    total: usize,
    count: usize,
    heroes: Vec<&'a crate::roster::ResolvedHero>,
}

/// Filtered roster for `GET /api/heroes?alignment=&faction=&search=`.
pub fn heroes_payload(roster: &Roster, path: &str) -> Result<String, HeroesPayloadError> {
    let query = parse_hero_query(path)?;
    let heroes = filter_heroes(&roster.heroes, &query);
    let payload = HeroesPayload {
        status: "ok",
        total: roster.heroes.len(),
        count: heroes.len(),
        heroes,
    };
    serde_json::to_string_pretty(&payload).map_err(HeroesPayloadError::Serialize)
}

/// Build a [HeroQuery] from a request path's query string. Absent params mean
/// "all"/empty; an alignment value outside all/good/evil/neutral is rejected.
pub fn parse_hero_query(path: &str) -> Result<HeroQuery, HeroesPayloadError> {
    let alignment = match query_param(path, "alignment").as_deref() {
        None | Some("") | Some("all") => AlignmentFilter::All,
        Some("good") => AlignmentFilter::Only(Alignment::Good),
        Some("evil") => AlignmentFilter::Only(Alignment::Evil),
        Some("neutral") => AlignmentFilter::Only(Alignment::Neutral),
        Some(other) => {
            return Err(HeroesPayloadError::BadQuery(format!(
                "Unknown alignment selector: {other}"
            )))
        }
    };

    let faction = match query_param(path, "faction") {
        None => FactionFilter::All,
        Some(name) if name.is_empty() || name == "all" => FactionFilter::All,
        Some(name) => FactionFilter::Named(name),
    };

    let search = query_param(path, "search").unwrap_or_default();

    Ok(HeroQuery {
        alignment,
        faction,
        search,
    })
}

/// First value of a query parameter, percent-decoded. None if the key is
/// absent from the query string.
fn query_param(path: &str, key: &str) -> Option<String> {
    let query = path.split('?').nth(1)?;
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next().unwrap_or("") == key {
            return Some(percent_decode(parts.next().unwrap_or("")));
        }
    }
    None
}

/// Minimal application/x-www-form-urlencoded decoding: `+` to space, `%XX`
/// hex escapes. Malformed escapes pass through literally.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let escape = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                match escape.and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
