//! Minimal HTTP/1.1 server for exercising the reqwest paths in tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as seen by the server
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Request line, e.g. `GET /a.jpg HTTP/1.1`
    pub line: String,
    /// Raw body
    pub body: Vec<u8>,
}

/// Canned routes keyed by path, answering every connection until dropped
pub struct TestServer {
    /// `http://127.0.0.1:port`
    pub base: String,
    /// Requests received so far
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl TestServer {
    /// Serve `routes` (path -> status line, body); unknown paths get 404
    pub async fn start(routes: Vec<(&'static str, &'static str, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<HashMap<_, _>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, status, body)| (path.to_string(), (status, body)))
                .collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = handle(socket, &routes, &recorded).await;
                });
            }
        });

        Self { base, requests }
    }

    /// Body of the first request whose line starts with `prefix`
    pub fn body_of(&self, prefix: &str) -> Option<Vec<u8>> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.line.starts_with(prefix))
            .map(|r| r.body.clone())
    }
}

async fn handle(
    mut socket: TcpStream,
    routes: &HashMap<String, (&'static str, Vec<u8>)>,
    recorded: &Mutex<Vec<Recorded>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let line = head.lines().next().unwrap_or_default().to_string();
    let header = |name: &str| {
        head.lines().find_map(|l| {
            let (k, v) = l.split_once(':')?;
            k.trim().eq_ignore_ascii_case(name).then(|| v.trim().to_string())
        })
    };
    let content_length = header("content-length").and_then(|v| v.parse::<usize>().ok());
    let chunked = header("transfer-encoding").is_some_and(|v| v.eq_ignore_ascii_case("chunked"));

    let mut body = buf[head_end..].to_vec();
    if let Some(len) = content_length {
        while body.len() < len {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    } else if chunked {
        while !body.ends_with(b"0\r\n\r\n") {
            let n = socket.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    }

    let path = line.split_whitespace().nth(1).unwrap_or("/").to_string();
    recorded.lock().unwrap().push(Recorded { line, body });

    let (status, payload) = routes
        .get(&path)
        .cloned()
        .unwrap_or(("404 Not Found", b"{}".to_vec()));
    let response_head = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        payload.len()
    );
    socket.write_all(response_head.as_bytes()).await?;
    socket.write_all(&payload).await?;
    socket.shutdown().await
}
