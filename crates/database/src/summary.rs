//! Summary history persistence.
//!
//! All operations are scoped by a caller-supplied `device_id`, compared
//! case-sensitively. The device id is the only tenancy boundary.

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{HistoryPage, SummaryPayload, SummaryRecord};
use crate::Result;

/// Maximum rows returned per history page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Current time as fixed-width RFC 3339 UTC text.
///
/// Microsecond precision keeps the text lexicographically ordered in time
/// order, which `ORDER BY created_at DESC` relies on.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Derive a display title from input text.
///
/// Trimmed text longer than 60 chars becomes its first 57 chars plus
/// "..."; shorter text is used verbatim. Counted in chars, not bytes.
fn make_title(input_text: &str) -> String {
    let trimmed = input_text.trim();
    if trimmed.chars().count() > 60 {
        let head: String = trimmed.chars().take(57).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}

/// Insert a new summary for a device.
///
/// Always inserts, never looks for an existing match; `upsert_summary`
/// delegates here on a miss. Returns the stored record with its new id.
pub async fn save_summary(
    pool: &SqlitePool,
    device_id: &str,
    payload: &SummaryPayload,
) -> Result<SummaryRecord> {
    let now = now_rfc3339();
    let record = SummaryRecord {
        id: Uuid::new_v4().to_string(),
        device_id: device_id.to_string(),
        title: make_title(&payload.input_text),
        input_text: payload.input_text.clone(),
        summary: payload.summary.clone(),
        translated_summary: payload.translated_summary.clone(),
        summary_type: payload.summary_type.unwrap_or_default(),
        style: payload.style.unwrap_or_default(),
        tonality: payload.tonality.unwrap_or_default(),
        language: payload
            .language
            .clone()
            .unwrap_or_else(|| "original".to_string()),
        created_at: now.clone(),
        updated_at: now,
        deleted_at: None,
    };

    sqlx::query(
        r#"
        INSERT INTO summaries (
            id, device_id, title, input_text, summary, translated_summary,
            summary_type, style, tonality, language, created_at, updated_at, deleted_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.device_id)
    .bind(&record.title)
    .bind(&record.input_text)
    .bind(&record.summary)
    .bind(&record.translated_summary)
    .bind(record.summary_type)
    .bind(record.style)
    .bind(record.tonality)
    .bind(&record.language)
    .bind(&record.created_at)
    .bind(&record.updated_at)
    .bind(&record.deleted_at)
    .execute(pool)
    .await?;

    tracing::debug!(id = %record.id, "inserted summary");

    Ok(record)
}

/// Insert or update a summary keyed by (device_id, input_text) among
/// active records.
///
/// A hit overwrites the fields present in the payload, keeps the rest,
/// and refreshes `updated_at`; `created_at` is untouched. A miss inserts
/// via [`save_summary`].
///
/// The lookup and the write are two separate statements. Two concurrent
/// upserts for the same key can both miss and both insert, leaving
/// duplicate active rows; callers accept that window.
pub async fn upsert_summary(
    pool: &SqlitePool,
    device_id: &str,
    payload: &SummaryPayload,
) -> Result<SummaryRecord> {
    let existing = sqlx::query_as::<_, SummaryRecord>(
        r#"
        SELECT id, device_id, title, input_text, summary, translated_summary,
               summary_type, style, tonality, language, created_at, updated_at, deleted_at
        FROM summaries
        WHERE device_id = ? AND input_text = ? AND deleted_at IS NULL
        "#,
    )
    .bind(device_id)
    .bind(&payload.input_text)
    .fetch_optional(pool)
    .await?;

    let Some(existing) = existing else {
        return save_summary(pool, device_id, payload).await;
    };

    let merged = SummaryRecord {
        title: make_title(&payload.input_text),
        summary: payload.summary.clone(),
        translated_summary: payload
            .translated_summary
            .clone()
            .or_else(|| existing.translated_summary.clone()),
        summary_type: payload.summary_type.unwrap_or(existing.summary_type),
        style: payload.style.unwrap_or(existing.style),
        tonality: payload.tonality.unwrap_or(existing.tonality),
        language: payload
            .language
            .clone()
            .unwrap_or_else(|| existing.language.clone()),
        updated_at: now_rfc3339(),
        ..existing
    };

    sqlx::query(
        r#"
        UPDATE summaries
        SET title = ?, summary = ?, translated_summary = ?, summary_type = ?,
            style = ?, tonality = ?, language = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&merged.title)
    .bind(&merged.summary)
    .bind(&merged.translated_summary)
    .bind(merged.summary_type)
    .bind(merged.style)
    .bind(merged.tonality)
    .bind(&merged.language)
    .bind(&merged.updated_at)
    .bind(&merged.id)
    .execute(pool)
    .await?;

    tracing::debug!(id = %merged.id, "updated summary in place");

    Ok(merged)
}

/// List active summaries for a device, newest first.
///
/// Fetches `limit + 1` rows past the offset to detect whether more
/// remain; only `limit` rows are returned. `limit` is clamped to
/// `1..=MAX_PAGE_SIZE` and `skip` to non-negative.
pub async fn get_history(
    pool: &SqlitePool,
    device_id: &str,
    skip: i64,
    limit: i64,
) -> Result<HistoryPage> {
    let skip = skip.max(0);
    let limit = limit.clamp(1, MAX_PAGE_SIZE);

    let mut rows = sqlx::query_as::<_, SummaryRecord>(
        r#"
        SELECT id, device_id, title, input_text, summary, translated_summary,
               summary_type, style, tonality, language, created_at, updated_at, deleted_at
        FROM summaries
        WHERE device_id = ? AND deleted_at IS NULL
        ORDER BY created_at DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(device_id)
    .bind(limit + 1)
    .bind(skip)
    .fetch_all(pool)
    .await?;

    let has_more = rows.len() as i64 > limit;
    rows.truncate(limit as usize);

    Ok(HistoryPage {
        items: rows,
        has_more,
        skip,
    })
}

/// Fetch one summary by id for a device.
///
/// Soft-deleted records are still returned here; they are only excluded
/// from listings and upsert matching. An id that is not a well-formed
/// UUID yields `None`, same as a missing record.
pub async fn get_summary(
    pool: &SqlitePool,
    device_id: &str,
    id: &str,
) -> Result<Option<SummaryRecord>> {
    if Uuid::parse_str(id).is_err() {
        return Ok(None);
    }

    let record = sqlx::query_as::<_, SummaryRecord>(
        r#"
        SELECT id, device_id, title, input_text, summary, translated_summary,
               summary_type, style, tonality, language, created_at, updated_at, deleted_at
        FROM summaries
        WHERE id = ? AND device_id = ?
        "#,
    )
    .bind(id)
    .bind(device_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Soft-delete one summary by id for a device.
///
/// Sets `deleted_at` on the matching active row. Returns whether exactly
/// one row changed; a malformed id, missing record, wrong device, or
/// already-deleted record all come back `false`.
pub async fn delete_summary(pool: &SqlitePool, device_id: &str, id: &str) -> Result<bool> {
    if Uuid::parse_str(id).is_err() {
        return Ok(false);
    }

    let result = sqlx::query(
        r#"
        UPDATE summaries
        SET deleted_at = ?
        WHERE id = ? AND device_id = ? AND deleted_at IS NULL
        "#,
    )
    .bind(now_rfc3339())
    .bind(id)
    .bind(device_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
