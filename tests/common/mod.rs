//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use cors_relay::{HttpServer, RelayConfig, Shutdown};

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response the mock upstream writes back.
pub struct MockResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl MockResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = bytes.into();
        self
    }
}

/// Handle to a running mock upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl MockUpstream {
    /// Target URL for this upstream's root path.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn last_request(&self) -> Option<ReceivedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// Start a mock upstream that answers every request with `respond`.
pub async fn start_mock_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&ReceivedRequest) -> MockResponse + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Arc<Mutex<Vec<ReceivedRequest>>> = Arc::new(Mutex::new(Vec::new()));

    let seen = requests.clone();
    let respond = Arc::new(respond);
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen = seen.clone();
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        if let Some(request) = read_request(&mut socket).await {
                            let response = respond(&request);
                            seen.lock().unwrap().push(request);
                            let _ = write_response(&mut socket, response).await;
                        }
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockUpstream { addr, requests }
}

async fn read_request(socket: &mut TcpStream) -> Option<ReceivedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find_terminator(&buf) {
            break pos;
        }
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            line.split_once(':')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    let content_length: usize = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(ReceivedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn find_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

async fn write_response(socket: &mut TcpStream, response: MockResponse) -> std::io::Result<()> {
    let status_text = match response.status {
        200 => "200 OK",
        204 => "204 No Content",
        301 => "301 Moved Permanently",
        404 => "404 Not Found",
        418 => "418 I'm a teapot",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        other => return write_raw_status(socket, other, response).await,
    };
    write_head_and_body(socket, status_text.to_string(), response).await
}

async fn write_raw_status(
    socket: &mut TcpStream,
    status: u16,
    response: MockResponse,
) -> std::io::Result<()> {
    write_head_and_body(socket, format!("{} Unknown", status), response).await
}

async fn write_head_and_body(
    socket: &mut TcpStream,
    status_text: String,
    response: MockResponse,
) -> std::io::Result<()> {
    let mut head = format!("HTTP/1.1 {}\r\n", status_text);
    head.push_str(&format!("Content-Length: {}\r\n", response.body.len()));
    for (name, value) in &response.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("Connection: close\r\n\r\n");

    socket.write_all(head.as_bytes()).await?;
    socket.write_all(&response.body).await?;
    socket.flush().await
}

/// Spawn a relay on an ephemeral port. Returns its address and the shutdown
/// handle keeping it alive.
pub async fn spawn_relay(config: RelayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}

/// Gzip-compress bytes using the same codec stack the relay decodes with.
pub async fn gzip(data: &[u8]) -> Vec<u8> {
    use async_compression::tokio::bufread::GzipEncoder;

    let mut encoder = GzipEncoder::new(data);
    let mut out = Vec::new();
    encoder.read_to_end(&mut out).await.unwrap();
    out
}

/// Raw-deflate-compress bytes.
#[allow(dead_code)]
pub async fn deflate(data: &[u8]) -> Vec<u8> {
    use async_compression::tokio::bufread::DeflateEncoder;

    let mut encoder = DeflateEncoder::new(data);
    let mut out = Vec::new();
    encoder.read_to_end(&mut out).await.unwrap();
    out
}
