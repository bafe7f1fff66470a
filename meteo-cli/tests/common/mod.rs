//! Test helpers: a throwaway HTTP server that answers with canned JSON and
//! a command builder pointed at it.

use assert_cmd::Command;
use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    thread,
    time::Duration,
};

pub const GEOCODING_PATH: &str = "/v1/search";
pub const FORECAST_PATH: &str = "/v1/forecast";

/// One canned answer, chosen by request path prefix.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    /// Accept the request but never answer it.
    pub stall: bool,
}

impl Route {
    pub fn ok(path: &'static str, body: &str) -> Self {
        Self { path, status: 200, body: body.to_string(), stall: false }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: r#"{"error": true, "reason": "fixture"}"#.to_string(),
            stall: false,
        }
    }

    pub fn stall(path: &'static str) -> Self {
        Self { path, status: 200, body: String::new(), stall: true }
    }
}

/// Serve `routes` on an ephemeral local port until the test process exits.
/// Returns the base URL, e.g. `http://127.0.0.1:40123`.
pub fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            answer(stream, &routes);
        }
    });

    format!("http://{addr}")
}

fn answer(mut stream: TcpStream, routes: &[Route]) {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&head);
    let path = head.split_whitespace().nth(1).unwrap_or("/");

    let route = routes.iter().find(|r| path.starts_with(r.path));
    if route.is_some_and(|r| r.stall) {
        // Hold the connection open past any client timeout.
        thread::sleep(Duration::from_secs(30));
        return;
    }

    let (status, body) = route.map(|r| (r.status, r.body.as_str())).unwrap_or((404, "{}"));
    let reason = if status == 200 { "OK" } else { "Fixture Error" };

    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// `meteo` with both endpoints pointed at `base` and logging silenced.
pub fn meteo(base: &str) -> Command {
    let mut cmd = Command::cargo_bin("meteo").expect("Failed to find meteo binary");
    cmd.env("METEO_GEOCODING_URL", format!("{base}{GEOCODING_PATH}"))
        .env("METEO_FORECAST_URL", format!("{base}{FORECAST_PATH}"))
        .env("METEO_TIMEOUT_SECS", "5")
        .env("RUST_LOG", "off")
        .env_remove("NO_COLOR");
    cmd
}

pub const PARIS_GEOCODING: &str = r#"{
    "results": [{
        "id": 2988507,
        "name": "Paris",
        "latitude": 48.85,
        "longitude": 2.35,
        "country": "France",
        "timezone": "Europe/Paris"
    }],
    "generationtime_ms": 0.7
}"#;

pub const PARIS_FORECAST: &str = r#"{
    "latitude": 48.86,
    "longitude": 2.3399997,
    "timezone": "Europe/Paris",
    "current": {
        "time": "2025-03-01T14:15",
        "interval": 900,
        "temperature_2m": 11.3,
        "apparent_temperature": 9.8,
        "relative_humidity_2m": 81,
        "wind_speed_10m": 12.6,
        "weather_code": 61
    },
    "daily": {
        "time": ["2025-03-01", "2025-03-02", "2025-03-03"],
        "weather_code": [61, 0, 95],
        "temperature_2m_max": [12.1, 15.0, 10.4],
        "temperature_2m_min": [5.2, 3.9, 6.0],
        "precipitation_probability_max": [45, 10, 80]
    }
}"#;
