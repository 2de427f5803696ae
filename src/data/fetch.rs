//! Fetch the game data feed: one unauthenticated GET, envelope validation,
//! typed result. No retry, no backoff, no caching.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::data::model::GameData;

/// Published unit-profile feed.
pub const DEFAULT_DATA_URL: &str = "https://nowforwrath.github.io/data2024.json";

const FETCH_TIMEOUT_SECS: u64 = 30;

/// Why a fetch failed. Everything past the fetch boundary only ever sees the
/// rendered message string.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not complete (DNS, connect, timeout, body read).
    Transport(String),
    /// The server answered with a non-success HTTP status.
    Status(u16),
    /// The body was not JSON of shape `{ "data": { "factions", "heroes" } }`.
    Schema(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Failed to fetch data: {msg}"),
            Self::Status(code) => write!(f, "Failed to fetch data: HTTP status {code}"),
            Self::Schema(msg) => write!(f, "Invalid data structure received: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: GameData,
}

/// Validate and parse a fetched body. Split out from the network call so the
/// schema checks are testable without a server.
pub fn parse_payload(body: &str) -> Result<GameData, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| FetchError::Schema(err.to_string()))?;
    Ok(envelope.data)
}

/// Perform the single GET for the session and parse the result.
pub fn fetch_game_data(url: &str) -> Result<GameData, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| FetchError::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    parse_payload(&body)
}
