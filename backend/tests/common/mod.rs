//! Common test utilities for integration tests
//!
//! Builds the router in-process and drives it with `oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use health_assessment_backend::{config::AppConfig, routes, services::ChatService, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application that answers chat locally
    pub fn new() -> Self {
        Self::with_chat(ChatService::local_only())
    }

    /// Create a test application with a specific chat service
    pub fn with_chat(chat: ChatService) -> Self {
        let state = AppState::with_chat(AppConfig::default(), chat);
        Self {
            app: routes::create_router(state),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST and parse the JSON response
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, text) = self.post(path, &body.to_string()).await;
        let value = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// A valid assessment form
pub fn valid_profile() -> Value {
    json!({
        "name": "Meera",
        "age": 42,
        "weight": 68,
        "height": 160,
        "gender": "female",
        "activityLevel": 1.375,
        "waterIntake": 1.8,
        "bedtime": "23:30",
        "wakeTime": "06:00",
        "breakfastTime": "07:30",
        "lunchTime": "13:00",
        "dinnerTime": "21:00",
        "foodChoices": ["rice", "dairy", "vegetables", "caffeine"]
    })
}
