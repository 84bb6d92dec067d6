//! Test support for exercising the client against a stubbed backend.
//!
//! [`StubBackend`] runs a real HTTP server on a random local port with a
//! fixed route table, and records every request it sees so tests can assert
//! on hit counts and headers (bearer token attachment, cache behavior).

use std::io::Read as _;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

/// One stubbed endpoint: exact method and URL (query string included).
#[derive(Debug, Clone)]
pub struct Route {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    /// A 200 route answering with a JSON body.
    #[must_use]
    pub fn json(method: &str, path: &str, body: &serde_json::Value) -> Self {
        Self {
            method: method.to_owned(),
            path: path.to_owned(),
            status: 200,
            body: body.to_string(),
        }
    }

    /// A route answering with a bare status code and empty JSON body.
    #[must_use]
    pub fn status(method: &str, path: &str, status: u16) -> Self {
        Self {
            method: method.to_owned(),
            path: path.to_owned(),
            status,
            body: "{}".to_owned(),
        }
    }
}

/// A request the stub saw, in arrival order.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// A stubbed backend on a random local port.
pub struct StubBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubBackend {
    /// Start serving `routes`. Unknown paths answer 404.
    #[must_use]
    pub fn spawn(routes: Vec<Route>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let mut request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let method = request.method().to_string().to_uppercase();
                let path = request.url().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.to_string());

                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                seen.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(RecordedRequest {
                        method: method.clone(),
                        path: path.clone(),
                        authorization,
                        body,
                    });

                let route = routes
                    .iter()
                    .find(|r| r.method == method && r.path == path);

                let response = match route {
                    Some(route) => {
                        tiny_http::Response::from_string(route.body.clone())
                            .with_status_code(route.status)
                    }
                    None => tiny_http::Response::from_string("{\"error\":\"not found\"}")
                        .with_status_code(404),
                };

                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("build header");
                let _ = request.respond(response.with_header(header));
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Everything the stub has seen so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times `method path` was hit.
    #[must_use]
    pub fn hits(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
