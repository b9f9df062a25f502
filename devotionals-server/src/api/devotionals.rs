//! Devotional CRUD endpoints
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | /api/devotionals | 200, live records newest first |
//! | GET | /api/devotionals/:id | 200, record |
//! | POST | /api/devotionals | 201, `{message, id}` |
//! | PATCH | /api/devotionals/:id | 200, refreshed record |
//! | DELETE | /api/devotionals/:id | 204, empty |

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use devotionals_common::db::Devotional;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use super::types::{CreateDevotionalRequest, CreatedResponse, UpdateDevotionalRequest};
use crate::db::devotionals as queries;
use crate::error::{ApiError, ApiResult, StoreAction, ValidationError};
use crate::AppState;

/// GET /api/devotionals
pub async fn list_devotionals(State(state): State<AppState>) -> ApiResult<Json<Vec<Devotional>>> {
    let devotionals = queries::list_live(&state.db)
        .await
        .map_err(ApiError::store(StoreAction::List))?;

    Ok(Json(devotionals))
}

/// GET /api/devotionals/:id
pub async fn get_devotional(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Devotional>> {
    let id = parse_id(&id)?;

    queries::find_live(&state.db, id)
        .await
        .map_err(ApiError::store(StoreAction::Get))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/devotionals
pub async fn create_devotional(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let request: CreateDevotionalRequest = object_body(payload)?;
    let devotional = request.validate()?;

    let id = queries::insert(&state.db, &devotional)
        .await
        .map_err(ApiError::store(StoreAction::Create))?;

    info!("Created devotional {}", id);
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// PATCH /api/devotionals/:id
///
/// Only the supplied fields change; `updated_at` is refreshed on success.
pub async fn update_devotional(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Devotional>> {
    let request: UpdateDevotionalRequest = object_body(payload)?;
    let changes = request.validate()?;
    let id = parse_id(&id)?;

    let updated = queries::update_live(&state.db, id, &changes)
        .await
        .map_err(ApiError::store(StoreAction::Update))?
        .ok_or(ApiError::NotFound)?;

    info!("Updated devotional {}", id);
    Ok(Json(updated))
}

/// DELETE /api/devotionals/:id
pub async fn delete_devotional(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    let deleted = queries::soft_delete(&state.db, id)
        .await
        .map_err(ApiError::store(StoreAction::Delete))?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!("Soft-deleted devotional {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// A path id that is not an integer can never match a row
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound)
}

/// Decode a request body that must be a JSON object
///
/// serde's derived struct impls also accept sequences, so arrays are
/// rejected here before field decoding.
fn object_body<T: DeserializeOwned>(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<T> {
    let Json(value) = payload.map_err(|rejection| ValidationError::single(rejection.body_text()))?;

    if !value.is_object() {
        return Err(ValidationError::single("request body must be a JSON object").into());
    }

    serde_json::from_value(value)
        .map_err(|e| ValidationError::single(format!("invalid request body: {}", e)).into())
}
