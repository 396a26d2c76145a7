//! Minimal HTTP/1.1 server standing in for the prediction service in
//! integration tests.
//!
//! Serves one canned JSON response per route. Each request is read fully
//! (headers plus any Content-Length body) before the answer is written and
//! the connection closed.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Canned answer for one route.
#[derive(Debug, Clone, Copy)]
pub struct CannedRoute {
    /// Status line without the version, e.g. "200 OK".
    pub status: &'static str,
    /// Response body, served as application/json.
    pub body: &'static str,
}

/// Starts a server answering `POST /predict` and `GET /health` with the given
/// canned responses. Returns the base endpoint (e.g. "http://127.0.0.1:12345").
/// The server runs until the process exits.
pub fn start(predict: CannedRoute, health: CannedRoute) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream, predict, health));
        }
    });
    endpoint
}

fn handle(mut stream: std::net::TcpStream, predict: CannedRoute, health: CannedRoute) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) => return,
            Ok(n) => n,
            Err(_) => return,
        };
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_header_end(&buf) {
            break end;
        }
    };

    // Drain the announced body so the peer never sees a reset mid-write.
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let wanted = header_end + content_length(&headers);
    while buf.len() < wanted {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(_) => return,
        }
    }

    let route = if headers.starts_with("POST /predict") {
        predict
    } else if headers.starts_with("GET /health") {
        health
    } else {
        CannedRoute {
            status: "404 Not Found",
            body: "{}",
        }
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length(headers: &str) -> usize {
    for line in headers.lines() {
        let lower = line.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("content-length:") {
            return rest.trim().parse().unwrap_or(0);
        }
    }
    0
}
