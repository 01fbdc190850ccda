//! Test utilities for extload
//!
//! This module provides helpers for writing tests: one-shot logging
//! initialization and a minimal canned-response HTTP server used to
//! exercise the download path without real network access.
//!
//! The server speaks just enough HTTP/1.1 for `reqwest` to be a happy
//! client - request line parsing, a `Content-Length` response header, and
//! `Connection: close`. Responses can carry an artificial delay so tests
//! can drive the fetch timeout and the concurrency properties of the
//! resolution coordinator.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Once;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Initializes the tracing subscriber at most once regardless of how many
/// times it is called. Respects the `RUST_LOG` environment variable if
/// set, or uses the provided level.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            // No logging if neither is provided
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

/// One canned HTTP response, keyed by request path.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: u16,
    reason: String,
    body: Vec<u8>,
    delay: Duration,
}

impl CannedResponse {
    /// A `200 OK` response with the given body.
    #[must_use]
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            reason: "OK".to_string(),
            body,
            delay: Duration::ZERO,
        }
    }

    /// An empty-bodied response with an arbitrary status line.
    #[must_use]
    pub fn status(status: u16, reason: &str) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    /// Delay the response by `delay` before any bytes are written.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Builder for [`TestHttpServer`]; add routes, then [`serve`].
///
/// [`serve`]: TestHttpServerBuilder::serve
#[derive(Debug, Default)]
pub struct TestHttpServerBuilder {
    routes: HashMap<String, CannedResponse>,
}

impl TestHttpServerBuilder {
    /// Register a canned response for a request path.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, response: CannedResponse) -> Self {
        self.routes.insert(path.into(), response);
        self
    }

    /// Bind a loopback listener and start serving the routes.
    pub async fn serve(self) -> TestHttpServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
        let addr = listener.local_addr().expect("test server addr");
        let routes = Arc::new(self.routes);

        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle_connection(stream, Arc::clone(&routes)));
            }
        });

        TestHttpServer {
            addr,
            handle,
        }
    }
}

/// Minimal canned-response HTTP server bound to an ephemeral loopback port.
///
/// Unrouted paths answer `404 Not Found`. The accept loop is aborted when
/// the server is dropped.
#[derive(Debug)]
pub struct TestHttpServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestHttpServer {
    /// Start building a server.
    #[must_use]
    pub fn start() -> TestHttpServerBuilder {
        TestHttpServerBuilder::default()
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestHttpServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle_connection(
    mut stream: tokio::net::TcpStream,
    routes: Arc<HashMap<String, CannedResponse>>,
) {
    let mut buf = vec![0u8; 4096];
    let mut read = 0;
    // Read until the end of the request headers; bodies are not expected.
    loop {
        match stream.read(&mut buf[read..]).await {
            Ok(0) => break,
            Ok(n) => {
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let request = String::from_utf8_lossy(&buf[..read]);
    let path = request.split_whitespace().nth(1).unwrap_or("/");
    let response = routes
        .get(path)
        .cloned()
        .unwrap_or_else(|| CannedResponse::status(404, "Not Found"));

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.reason,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(&response.body).await;
    let _ = stream.flush().await;
}
