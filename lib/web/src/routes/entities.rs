//! The generic CRUD handlers.
//!
//! One handler set serves all seven entity families; the schema is captured
//! per route at registration time.

use crate::error::ServerError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sejour_model::{derive_id, validate_id, EntitySchema, Record};
use sejour_store::ListFilters;
use serde::Deserialize;
use serde_json::{json, Value};

pub(crate) fn entity_router(schema: &'static EntitySchema) -> Router<AppState> {
    let collection = format!("/{}", schema.route);
    let item = format!("/{}/{{id}}", schema.route);
    Router::new()
        .route(
            &collection,
            get(move |state: State<AppState>, query: Query<ListParams>| {
                list_entities(schema, state, query)
            })
            .post(move |state: State<AppState>, body: Json<Value>| {
                create_entity(schema, state, body)
            }),
        )
        .route(
            &item,
            get(move |state: State<AppState>, path: Path<String>| {
                get_entity(schema, state, path)
            })
            .put(
                move |state: State<AppState>, path: Path<String>, body: Json<Value>| {
                    replace_entity(schema, state, path, body)
                },
            )
            .delete(move |state: State<AppState>, path: Path<String>| {
                delete_entity(schema, state, path)
            }),
        )
}

/// Collection query string. Only meaningful for schemas that carry the
/// matching fields; ignored elsewhere.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_capacity: Option<i64>,
    certifie: Option<String>,
}

impl ListParams {
    fn into_filters(self) -> ListFilters {
        ListFilters {
            min_price: self.min_price,
            max_price: self.max_price,
            min_capacity: self.min_capacity,
            // Only the literal string "true" activates the filter, as in the
            // original API.
            certified: self
                .certifie
                .filter(|v| v.eq_ignore_ascii_case("true"))
                .map(|_| true),
        }
    }
}

/// `GET /api/<entities>`.
///
/// A store failure degrades to an empty collection with 200 rather than an
/// error: the collection endpoints promise an array. Every other operation
/// propagates the failure as a 500.
async fn list_entities(
    schema: &'static EntitySchema,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Value> {
    match state.repository(schema).list(&params.into_filters()).await {
        Ok(rows) => Json(Value::Array(
            rows.iter().map(|row| row.to_json(schema)).collect(),
        )),
        Err(error) => {
            tracing::warn!(
                entity = schema.route,
                %error,
                "store unavailable, returning empty collection"
            );
            Json(Value::Array(Vec::new()))
        }
    }
}

/// `GET /api/<entities>/{id}`.
async fn get_entity(
    schema: &'static EntitySchema,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let id = validate_id(&id)?;
    let row = state
        .repository(schema)
        .get(id)
        .await?
        .ok_or(ServerError::NotFound)?;
    Ok(Json(row.to_json(schema)))
}

/// `POST /api/<entities>`.
///
/// The identifier comes from the caller-supplied `id`, else from the
/// slugified name, else a random UUID.
async fn create_entity(
    schema: &'static EntitySchema,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ServerError> {
    let record = Record::from_json(schema, &body)?;
    let explicit = body.get("id").and_then(Value::as_str);
    let id = derive_id(explicit, record.name())?;
    state.repository(schema).create(&id, &record).await?;
    let uri = state.vocabulary().entity_uri(&id);
    tracing::info!(entity = schema.route, %id, "created");
    Ok((StatusCode::CREATED, Json(json!({ "id": id, "uri": uri }))))
}

/// `PUT /api/<entities>/{id}`. The identifier and URI are stable across
/// updates.
async fn replace_entity(
    schema: &'static EntitySchema,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ServerError> {
    let id = validate_id(&id)?;
    let record = Record::from_json(schema, &body)?;
    state.repository(schema).replace(id, &record).await?;
    let uri = state.vocabulary().entity_uri(id);
    tracing::info!(entity = schema.route, id, "updated");
    Ok(Json(json!({ "id": id, "uri": uri })))
}

/// `DELETE /api/<entities>/{id}`. Deleting an absent entity succeeds.
async fn delete_entity(
    schema: &'static EntitySchema,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ServerError> {
    let id = validate_id(&id)?;
    state.repository(schema).delete(id).await?;
    tracing::info!(entity = schema.route, id, "deleted");
    Ok(Json(json!({ "id": id })))
}
