//! Canned-response HTTP server for client tests
//!
//! Binds an axum server to `127.0.0.1:0`, answers every request with a
//! configured status and JSON body, and records what it received so tests
//! can assert on the exact path, query string and headers a client sent.
//!
//! ```ignore
//! let server = MockServer::start(200, r#"{"items":[]}"#).await;
//! let client = HereClient::with_base_url(config, server.base_url());
//! client.geocode(&params).await?;
//! assert_eq!(server.requests()[0].path(), "/v1/geocode");
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::warn;

/// A request the mock server received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path_and_query: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.path_and_query
            .split_once('?')
            .map_or(self.path_and_query.as_str(), |(path, _)| path)
    }

    pub fn query(&self) -> Option<&str> {
        self.path_and_query.split_once('?').map(|(_, query)| query)
    }

    /// First header value with the given (case-insensitive) name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Canned response served for a path (or for every path when `path` is `None`)
#[derive(Debug, Clone)]
pub struct Route {
    pub path: Option<String>,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(path: &str, status: u16, body: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            status,
            body: body.to_string(),
        }
    }

    pub fn any(status: u16, body: &str) -> Self {
        Self {
            path: None,
            status,
            body: body.to_string(),
        }
    }
}

struct Shared {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running mock server; shut down when dropped
pub struct MockServer {
    addr: SocketAddr,
    base_url: String,
    shared: Arc<Shared>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Serve `body` with `status` for every request
    pub async fn start(status: u16, body: &str) -> Self {
        Self::with_routes(vec![Route::any(status, body)]).await
    }

    /// Serve the first matching route; unmatched paths get 404
    pub async fn with_routes(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener
            .local_addr()
            .expect("Failed to read mock server address");

        let shared = Arc::new(Shared {
            routes,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(respond).with_state(shared.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!(error = %e, "Mock server stopped");
            }
        });

        Self {
            addr,
            base_url: format!("http://{addr}"),
            shared,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:{port}`, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(shared): State<Arc<Shared>>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    let recorded = RecordedRequest {
        method: request.method().to_string(),
        path_and_query: request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| path.clone()),
        headers: request
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    };
    shared.requests.lock().unwrap().push(recorded);

    let route = shared
        .routes
        .iter()
        .find(|r| r.path.as_deref().map_or(true, |p| p == path));

    match route {
        Some(route) => (
            StatusCode::from_u16(route.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_canned_body_and_records_request() {
        let server = MockServer::start(200, r#"{"ok":true}"#).await;

        let response = reqwest::Client::new()
            .get(format!("{}/v1/thing?a=1&b=two", server.base_url()))
            .header("Authorization", "secret")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.text().await.unwrap(), r#"{"ok":true}"#);

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path(), "/v1/thing");
        assert_eq!(requests[0].query(), Some("a=1&b=two"));
        assert_eq!(requests[0].header("authorization"), Some("secret"));
    }

    #[tokio::test]
    async fn test_routes_by_path() {
        let server = MockServer::with_routes(vec![
            Route::new("/token", 200, r#"{"access_token":"t"}"#),
            Route::new("/search", 500, "boom"),
        ])
        .await;
        let client = reqwest::Client::new();

        let token = client
            .get(format!("{}/token", server.base_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(token.status().as_u16(), 200);

        let search = client
            .get(format!("{}/search", server.base_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(search.status().as_u16(), 500);

        let missing = client
            .get(format!("{}/nope", server.base_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status().as_u16(), 404);
        assert_eq!(server.requests().len(), 3);
    }
}
