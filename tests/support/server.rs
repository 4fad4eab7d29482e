//! Local HTTP server that answers scripted responses.
//!
//! Each response is served on its own connection with `Connection: close`.
//! The server stops after the last response, or after a few seconds without
//! a connection so a test with a missing request fails instead of hanging.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const IDLE_LIMIT: Duration = Duration::from_secs(5);

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct Received {
    /// Method and request target, e.g. `GET /admin/groups?name=web`
    pub line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Received {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Scripted server running on a background thread.
pub struct FakeServer {
    url: String,
    handle: JoinHandle<Vec<Received>>,
}

impl FakeServer {
    /// Serve each `(status, body)` pair in order, one per request.
    pub fn start(responses: &[(u16, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        listener
            .set_nonblocking(true)
            .expect("failed to set listener nonblocking");
        let url = format!("http://{}", listener.local_addr().expect("no local address"));
        let responses: Vec<(u16, String)> = responses
            .iter()
            .map(|(status, body)| (*status, body.to_string()))
            .collect();

        let handle = thread::spawn(move || {
            let mut received = Vec::new();
            for (status, body) in responses {
                let Some(stream) = accept(&listener) else {
                    break;
                };
                let mut reader = BufReader::new(stream);
                received.push(read_request(&mut reader));

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                reader
                    .get_mut()
                    .write_all(response.as_bytes())
                    .expect("failed to write response");
            }
            received
        });

        Self { url, handle }
    }

    /// Base URL, e.g. `http://127.0.0.1:40123`
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the server to stop and return every request it saw.
    pub fn finish(self) -> Vec<Received> {
        self.handle.join().expect("server thread panicked")
    }
}

/// Request lines of everything the server saw, in order.
pub fn lines(received: &[Received]) -> Vec<&str> {
    received.iter().map(|r| r.line.as_str()).collect()
}

fn accept(listener: &TcpListener) -> Option<TcpStream> {
    let deadline = Instant::now() + IDLE_LIMIT;
    loop {
        match listener.accept() {
            Ok((stream, _)) => {
                stream
                    .set_nonblocking(false)
                    .expect("failed to set stream blocking");
                stream
                    .set_read_timeout(Some(IDLE_LIMIT))
                    .expect("failed to set read timeout");
                return Some(stream);
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                if Instant::now() >= deadline {
                    return None;
                }
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => panic!("accept failed: {}", e),
        }
    }
}

fn read_request(reader: &mut BufReader<TcpStream>) -> Received {
    let mut line = String::new();
    reader.read_line(&mut line).expect("failed to read request line");
    let line = line
        .trim_end()
        .trim_end_matches("HTTP/1.1")
        .trim_end()
        .to_string();

    let mut headers = Vec::new();
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).expect("failed to read header");
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).expect("failed to read body");

    Received {
        line,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
