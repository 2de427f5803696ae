pub mod fetch;
pub mod model;

pub use fetch::{fetch_game_data, parse_payload, FetchError, DEFAULT_DATA_URL};
pub use model::{Alignment, Faction, GameData, Hero, HeroFactionInfo, MagicalPower, StatValue};
