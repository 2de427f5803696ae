//! Session state for one browsing session. The session is the sole owner of
//! fetched data; resolution and filtering only ever run against a loaded
//! roster, never a null dataset.

use chrono::{DateTime, Utc};

use crate::data::fetch::FetchError;
use crate::data::model::GameData;
use crate::roster::Roster;

/// Lifecycle: uninitialized -> loading -> (loaded | failed). A later fetch
/// replaces the roster wholesale; nothing is merged.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Loading,
    Loaded(Roster),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    fetched_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the single per-session fetch as in flight.
    pub fn begin_load(&mut self) {
        self.state = SessionState::Loading;
    }

    /// Record the fetch outcome. Errors are kept only as their rendered
    /// message; the kind does not survive past this boundary.
    pub fn complete(&mut self, result: Result<GameData, FetchError>) {
        match result {
            Ok(data) => {
                self.state = SessionState::Loaded(Roster::build(data));
                self.fetched_at = Some(Utc::now());
            }
            Err(err) => {
                self.state = SessionState::Failed(err.to_string());
            }
        }
    }

    /// Build a session already holding data, bypassing the fetch. Used by
    /// tests and anywhere a dataset is supplied directly.
    pub fn with_data(data: GameData) -> Self {
        Session {
            state: SessionState::Loaded(Roster::build(data)),
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn roster(&self) -> Option<&Roster> {
        match &self.state {
            SessionState::Loaded(roster) => Some(roster),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn status_label(&self) -> &'static str {
        match self.state {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Loading => "loading",
            SessionState::Loaded(_) => "loaded",
            SessionState::Failed(_) => "failed",
        }
    }
}
