use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
};
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_host: "127.0.0.1".to_string(),
            api_port: 0,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            seed_fixtures: true,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid GET request")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid JSON request")
}

pub async fn response_json(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");
    serde_json::from_slice(&body).expect("JSON response body")
}
