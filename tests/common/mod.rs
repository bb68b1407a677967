#![allow(dead_code)]

use apod_client::ApodConfig;
use apod_client::infrastructure::http::NasaApodClient;
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const TEST_KEY: &str = "test-key";
pub const APOD_PATH: &str = "/planetary/apod";

/// Canned response served for every request.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    canned: Canned,
    queries: Arc<Mutex<Vec<String>>>,
}

/// Local stand-in for api.nasa.gov that records every query string it sees.
pub struct MockApi {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            canned: Canned {
                status,
                body: body.into(),
            },
            queries: queries.clone(),
        };

        let app = Router::new()
            .route(APOD_PATH, get(respond))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, queries }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, APOD_PATH)
    }

    pub fn client(&self) -> NasaApodClient {
        let config = ApodConfig::new(TEST_KEY)
            .with_base_url(self.base_url())
            .with_timeout_seconds(5);
        NasaApodClient::new(&config).unwrap()
    }

    /// Query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Decoded pairs of the only request received.
    pub fn single_query_pairs(&self) -> Vec<(String, String)> {
        let queries = self.queries();
        assert_eq!(queries.len(), 1, "expected exactly one request");
        url::form_urlencoded::parse(queries[0].as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

async fn respond(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state
        .queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());

    (
        state.canned.status,
        [("content-type", "application/json")],
        state.canned.body.clone(),
    )
}

pub fn apod_json(date: &str, title: &str) -> String {
    serde_json::json!({
        "date": date,
        "explanation": format!("Explanation for {title}."),
        "hdurl": format!("https://apod.nasa.gov/apod/image/{date}_big.jpg"),
        "media_type": "image",
        "service_version": "v1",
        "title": title,
        "url": format!("https://apod.nasa.gov/apod/image/{date}.jpg"),
    })
    .to_string()
}

pub fn apod_array_json(entries: &[(&str, &str)]) -> String {
    let items: Vec<String> = entries
        .iter()
        .map(|(date, title)| apod_json(date, title))
        .collect();
    format!("[{}]", items.join(","))
}

/// An address nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, APOD_PATH)
}
