use std::env;

use crate::data::fetch::{fetch_game_data, DEFAULT_DATA_URL};
use crate::roster::Roster;
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Fetch,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("fetch") => Some(Command::Fetch),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Fetch) => handle_fetch(args),
        None => {
            eprintln!("usage: palantir <serve|fetch>");
            2
        }
    }
}

fn data_url_from_env() -> String {
    env::var("PALANTIR_DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string())
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("PALANTIR_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let data_url = data_url_from_env();
    match server::run_server(&bind_addr, &data_url) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

/// `palantir fetch [url]`: one fetch, print a roster summary as JSON.
fn handle_fetch(args: &[String]) -> i32 {
    let data_url = args
        .get(2)
        .cloned()
        .unwrap_or_else(data_url_from_env);

    let data = match fetch_game_data(&data_url) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    let faction_count = data.factions.len();
    let hero_count = data.heroes.len();
    let roster = Roster::build(data);
    let by_alignment = |alignment: crate::data::model::Alignment| {
        roster
            .heroes
            .iter()
            .filter(|h| h.alignment == alignment)
            .count()
    };

    let summary = serde_json::json!({
        "url": data_url,
        "factions": faction_count,
        "heroes": hero_count,
        "visible": roster.heroes.len(),
        "good": by_alignment(crate::data::model::Alignment::Good),
        "evil": by_alignment(crate::data::model::Alignment::Evil),
        "neutral": by_alignment(crate::data::model::Alignment::Neutral),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("summary serialization failed: {err}");
            1
        }
    }
}
