//! API handlers
//!
//! Every mock handler responds 200 with `Content-Type: application/json`
//! regardless of the request. Fixture read failures are swallowed into an
//! empty object so callers never see a non-200 response.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::api::AppState;
use crate::fixture::Fixture;

/// A record in the fixed number list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NumberRecord {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixed seven-record number list, in order.
const NUMBER_LIST: [NumberRecord; 7] = [
    NumberRecord { id: 1, name: "one", description: "The number one" },
    NumberRecord { id: 2, name: "two", description: "The number two" },
    NumberRecord { id: 3, name: "three", description: "The number three" },
    NumberRecord { id: 4, name: "four", description: "The number four" },
    NumberRecord { id: 5, name: "five", description: "The number five" },
    NumberRecord { id: 6, name: "six", description: "The number six" },
    NumberRecord { id: 7, name: "seven", description: "The number seven" },
];

pub fn number_list() -> Vec<NumberRecord> {
    NUMBER_LIST.to_vec()
}

/// Fixed number list mock
pub async fn numbers() -> Json<Vec<NumberRecord>> {
    tracing::info!("Serving number list mock data");
    Json(number_list())
}

/// Transactions fixture passthrough
pub async fn transactions(State(state): State<AppState>) -> Json<Value> {
    tracing::info!("Serving transactions mock data");
    Json(state.fixtures.load_or_empty(Fixture::Transactions).await)
}

/// Water measurements fixture passthrough
pub async fn water_measurements(State(state): State<AppState>) -> Json<Value> {
    tracing::info!("Serving water measurements mock data");
    Json(
        state
            .fixtures
            .load_or_empty(Fixture::WaterMeasurements)
            .await,
    )
}

/// Health check reporting which fixture files are present
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let fixtures = Fixture::ALL
        .into_iter()
        .map(|fixture| {
            (
                fixture.name().to_string(),
                state.fixtures.path(fixture).exists(),
            )
        })
        .collect();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        fixtures,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub fixtures: BTreeMap<String, bool>,
}
