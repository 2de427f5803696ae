//! Request dispatch. Data routes are guarded by session state: filtering and
//! resolution never run unless a roster is loaded.

use crate::server::api;
use crate::session::Session;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, session: &Session) -> HttpResponse {
    let route = path.split('?').next().unwrap_or(path);

    match (method, route) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload(session) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/status") => match api::status_payload(session) {
            Ok(payload) => json_ok(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/factions") => match require_roster(session) {
            Ok(roster) => match api::factions_payload(roster) {
                Ok(payload) => json_ok(payload),
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            },
            Err(response) => response,
        },
        ("GET", "/api/heroes") => match require_roster(session) {
            Ok(roster) => match api::heroes_payload(roster, path) {
                Ok(payload) => json_ok(payload),
                Err(api::HeroesPayloadError::BadQuery(msg)) => {
                    error_response(400, "Bad Request", &msg)
                }
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            },
            Err(response) => response,
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

/// Roster for data routes, or the 503 describing why there is none yet.
fn require_roster(session: &Session) -> Result<&crate::roster::Roster, HttpResponse> {
    if let Some(roster) = session.roster() {
        return Ok(roster);
    }
    let message = match session.error() {
        Some(error) => error.to_string(),
        None => format!("Game data not loaded (status: {})", session.status_label()),
    };
    Err(error_response(503, "Service Unavailable", &message))
}

fn json_ok(payload: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body: payload,
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Palantir — Unit Profile Browser</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 1200px; margin: 24px auto; padding: 0 12px; background: #0f172a; color: #e2e8f0; }
    h1 { margin-bottom: 4px; }
    .subtitle { color: #94a3b8; margin-top: 0; }
    .controls { display: flex; gap: 8px; flex-wrap: wrap; margin: 16px 0; }
    input, select { padding: 8px; background: #1e293b; color: #e2e8f0; border: 1px solid #334155; border-radius: 6px; }
    input { flex: 1; min-width: 180px; }
    .summary { color: #94a3b8; margin: 8px 0; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 14px; }
    .card { background: #1e293b; border-radius: 8px; padding: 14px; border-top: 4px solid #475569; }
    .card.good { border-top-color: #4ade80; }
    .card.evil { border-top-color: #f87171; }
    .card .faction { color: #94a3b8; font-size: 0.8rem; text-transform: uppercase; }
    .card h2 { margin: 2px 0 8px; font-size: 1.1rem; }
    .card .points { float: right; background: #334155; border-radius: 12px; padding: 2px 10px; font-weight: bold; }
    .stats { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; margin: 8px 0; }
    .stat { background: #0f172a; border-radius: 4px; text-align: center; padding: 4px 0; }
    .stat .label { display: block; font-size: 0.65rem; color: #94a3b8; }
    .tags { display: flex; flex-wrap: wrap; gap: 4px; margin-top: 8px; }
    .tag { background: #334155; font-size: 0.7rem; padding: 2px 8px; border-radius: 4px; }
    .rules { font-size: 0.75rem; color: #94a3b8; margin-top: 8px; }
    .error { background: #7f1d1d; padding: 12px; border-radius: 6px; }
    .empty { background: #1e293b; padding: 24px; border-radius: 6px; text-align: center; }
  </style>
</head>
<body>
  <h1>Palantir</h1>
  <p class="subtitle">Unit profile browser</p>

  <div class="controls">
    <input id="search" type="text" placeholder="Search name, keywords, special rules..." />
    <select id="alignment">
      <option value="all">All Alignments</option>
      <option value="good">Good</option>
      <option value="evil">Evil</option>
    </select>
    <select id="faction">
      <option value="all">All Factions</option>
    </select>
  </div>

  <p class="summary" id="summary"></p>
  <div id="content" class="grid"></div>

  <script>
    const searchEl = document.getElementById('search');
    const alignmentEl = document.getElementById('alignment');
    const factionEl = document.getElementById('faction');
    const summaryEl = document.getElementById('summary');
    const contentEl = document.getElementById('content');

    function stat(label, value) {
      return '<div class="stat"><span class="label">' + label + '</span>' + (value ?? '-') + '</div>';
    }

    function card(hero) {
      const primary = (hero.factions && hero.factions[0]) ? hero.factions[0].name : '';
      const stats = stat('Mv', hero.movement != null ? hero.movement + '&quot;' : '-')
        + stat('F/S', (hero.fight ?? '-') + '/' + (hero.shoot ?? '-') + '+')
        + stat('S', hero.strength) + stat('D', hero.defence) + stat('A', hero.attack)
        + stat('W', hero.wounds) + stat('C', hero.courage);
      const tags = (hero.keywords || []).map(kw => '<span class="tag">' + kw + '</span>').join('');
      const rules = (hero.specialRules || []).join(' &middot; ');
      return '<div class="card ' + hero.alignment + '">'
        + '<span class="points">' + hero.points + ' pts</span>'
        + '<div class="faction">' + primary + '</div>'
        + '<h2>' + hero.name + '</h2>'
        + '<div class="stats">' + stats + '</div>'
        + (tags ? '<div class="tags">' + tags + '</div>' : '')
        + (rules ? '<div class="rules">' + rules + '</div>' : '')
        + '</div>';
    }

    async function loadFactions() {
      const response = await fetch('/api/factions');
      if (!response.ok) return;
      const payload = await response.json();
      for (const name of payload.factions) {
        const option = document.createElement('option');
        option.value = name;
        option.textContent = name;
        factionEl.appendChild(option);
      }
    }

    async function refresh() {
      const params = new URLSearchParams({
        alignment: alignmentEl.value,
        faction: factionEl.value,
        search: searchEl.value,
      });
      const response = await fetch('/api/heroes?' + params.toString());
      if (!response.ok) {
        const payload = await response.json().catch(() => null);
        contentEl.className = '';
        contentEl.innerHTML = '<div class="error">' + ((payload && payload.message) || 'Request failed') + '</div>';
        summaryEl.textContent = '';
        return;
      }
      const payload = await response.json();
      summaryEl.textContent = 'Showing ' + payload.count + ' of ' + payload.total + ' profiles.';
      if (payload.heroes.length === 0) {
        contentEl.className = '';
        contentEl.innerHTML = '<div class="empty">No profiles found. Try adjusting your search or filters.</div>';
        return;
      }
      contentEl.className = 'grid';
      contentEl.innerHTML = payload.heroes.map(card).join('');
    }

    let searchTimer = null;
    searchEl.addEventListener('input', () => {
      if (searchTimer) clearTimeout(searchTimer);
      searchTimer = setTimeout(refresh, 300);
    });
    alignmentEl.addEventListener('change', refresh);
    factionEl.addEventListener('change', refresh);

    loadFactions().then(refresh);
  </script>
</body>
</html>
"##
    .to_string()
}
