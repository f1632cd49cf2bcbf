//! Liveness endpoint.

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use serde_json::{json, Value};

/// GET /health - Report service liveness and the loaded model identity
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": {
            "name": state.model.name(),
            "version": state.model.version(),
        },
        "service_version": env!("CARGO_PKG_VERSION"),
    }))
}
