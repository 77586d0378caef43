#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use polaris::{api::create_router, db::MemoryPolicyStore, models::Policy, AppState, Config};
use serde_json::Value;
use tower::ServiceExt as _;

/// Build a router over an in-memory store holding `policies`.
pub fn app_with(policies: Vec<Policy>) -> Router {
    let state = AppState::with_store(
        Config::default(),
        Arc::new(MemoryPolicyStore::new(policies)),
    );
    create_router(state)
}

pub fn date(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn new(number: &str, insured: &str) -> Self {
        Self {
            policy: Policy {
                policy_number: number.to_string(),
                named_insured: insured.to_string(),
                line_of_business: vec!["Commercial Auto".to_string()],
                status: "BOUND".to_string(),
                effective_date: date("2024-01-01T00:00:00Z"),
                expiration_date: date("2025-01-01T00:00:00Z"),
                premium: 5000.0,
                mnpid: None,
                mbu_handler: None,
                producing_uw: None,
            },
        }
    }

    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.policy.line_of_business = lines.iter().map(|line| line.to_string()).collect();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.policy.status = status.to_string();
        self
    }

    pub fn mnpid(mut self, mnpid: &str) -> Self {
        self.policy.mnpid = Some(mnpid.to_string());
        self
    }

    pub fn handler(mut self, handler: &str) -> Self {
        self.policy.mbu_handler = Some(handler.to_string());
        self
    }

    pub fn underwriter(mut self, underwriter: &str) -> Self {
        self.policy.producing_uw = Some(underwriter.to_string());
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}

pub async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Policy numbers from a search response's data array, in order.
pub fn policy_numbers(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|policy| policy["policy_number"].as_str().unwrap().to_string())
        .collect()
}
