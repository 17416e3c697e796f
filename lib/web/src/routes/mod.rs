use axum::Json;
use serde_json::{json, Value};

mod entities;

pub(crate) use entities::entity_router;

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
