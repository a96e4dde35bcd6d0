//! Device-scoped history routes.
//!
//! Every operation here requires an `X-Device-Id` header; the value is the
//! only tenancy boundary and is passed through to the repository untouched.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use database::models::{HistoryPage, SummaryPayload, SummaryRecord};
use database::summary;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Name of the device identity header.
pub const DEVICE_ID_HEADER: &str = "x-device-id";

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Rows to skip from the newest end.
    #[serde(default)]
    pub skip: i64,
    /// Page size.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Extract the device id from request headers.
///
/// The header must be present and non-blank; it is otherwise passed
/// through untouched (opaque, case-sensitive).
fn device_id(headers: &HeaderMap) -> Result<String> {
    let value = headers
        .get(DEVICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if value.trim().is_empty() {
        return Err(ApiError::MissingDeviceId);
    }

    Ok(value.to_string())
}

/// Insert or update a summary keyed by its input text.
pub async fn upsert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SummaryPayload>,
) -> Result<Json<SummaryRecord>> {
    let device_id = device_id(&headers)?;
    let record = summary::upsert_summary(state.db.pool(), &device_id, &payload).await?;
    info!(id = %record.id, "history upserted");
    Ok(Json(record))
}

/// List non-deleted summaries for the device, newest first.
pub async fn list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryPage>> {
    let device_id = device_id(&headers)?;
    let page = summary::get_history(state.db.pool(), &device_id, query.skip, query.limit).await?;
    Ok(Json(page))
}

/// Fetch one summary by id.
pub async fn get_one(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<SummaryRecord>> {
    let device_id = device_id(&headers)?;
    let record = summary::get_summary(state.db.pool(), &device_id, &id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// Soft-delete one summary by id.
pub async fn delete_one(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let device_id = device_id(&headers)?;
    let deleted = summary::delete_summary(state.db.pool(), &device_id, &id).await?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    info!(%id, "history soft-deleted");
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_device_id_requires_header() {
        let headers = HeaderMap::new();
        assert!(matches!(device_id(&headers), Err(ApiError::MissingDeviceId)));
    }

    #[test]
    fn test_device_id_rejects_blank_value() {
        let mut headers = HeaderMap::new();
        headers.insert(DEVICE_ID_HEADER, HeaderValue::from_static("   "));
        assert!(matches!(device_id(&headers), Err(ApiError::MissingDeviceId)));
    }

    #[test]
    fn test_device_id_passes_value_through() {
        let mut headers = HeaderMap::new();
        headers.insert(DEVICE_ID_HEADER, HeaderValue::from_static("Device-A"));
        assert_eq!(device_id(&headers).unwrap(), "Device-A");
    }
}
