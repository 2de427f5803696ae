//! Palantir: read-only browser for tabletop-wargame unit profiles.
//!
//! Fetches one JSON feed of factions and heroes, derives each hero's faction
//! alignment, and serves a filterable card grid. The interesting parts are
//! [roster::alignment] (one-hop faction alignment inheritance) and
//! [roster::filter] (the visibility cut and the AND-combined grid predicates).

pub mod cli;
pub mod data;
pub mod roster;
pub mod server;
pub mod session;
