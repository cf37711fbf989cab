//! Shared helpers: a loopback referrals endpoint and a ready-made form

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use refer_earn::{config::Config, referral::FormData};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

/// One request seen by the test server
#[derive(Debug, Clone)]
pub struct ReceivedReferral {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    received: Arc<Mutex<Vec<ReceivedReferral>>>,
}

pub struct TestServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedReferral>>>,
}

impl TestServer {
    pub async fn received(&self) -> Vec<ReceivedReferral> {
        self.received.lock().await.clone()
    }
}

async fn record_referral(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .received
        .lock()
        .await
        .push(ReceivedReferral { content_type, body });
    state.status
}

/// Start a referrals endpoint that answers every POST with `status`
pub async fn spawn_referral_server(status: StatusCode) -> TestServer {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        status,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/api/referrals", post(record_referral))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    TestServer {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_ms = 5_000;
    config.ui.auto_close_ms = 50;
    config
}

/// Scenario A input
pub fn valid_form() -> FormData {
    FormData {
        referrer_name: "Ann".to_string(),
        referrer_email: "ann@x.com".to_string(),
        referee_name: "Bo".to_string(),
        referee_email: "bo@x.com".to_string(),
        course: "web-development".to_string(),
    }
}
