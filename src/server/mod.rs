//! HTTP presentation layer: fetch the dataset once at startup, then serve the
//! grid UI and the JSON API over a plain TCP accept loop. Session state never
//! mutates after startup, so handlers share it by reference.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

use crate::data::fetch::fetch_game_data;
use crate::session::Session;

pub fn run_server(bind_addr: &str, data_url: &str) -> std::io::Result<()> {
    let mut session = Session::new();
    session.begin_load();
    println!("fetching game data from {data_url}");
    let result = fetch_game_data(data_url);
    if let Err(ref err) = result {
        eprintln!("fetch failed: {err}");
    }
    session.complete(result);
    if let Some(roster) = session.roster() {
        println!(
            "loaded {} browsable heroes across {} factions",
            roster.heroes.len(),
            roster.faction_names.len()
        );
    }

    let listener = TcpListener::bind(bind_addr)?;
    println!("palantir server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, &session) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream, session: &Session) -> std::io::Result<()> {
    let mut buffer = [0_u8; 8192];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let response = routes::route_request(method, path, session).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
