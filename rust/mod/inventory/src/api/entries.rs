use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use seedstock_core::{EntryDraft, Kind, PageParams};

use super::{ApiError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports))
        .route("/{kind}", get(list_entries).post(create_entry))
        .route("/{kind}/{id}", axum::routing::delete(delete_entry))
}

fn parse_kind(kind: &str) -> Result<Kind, ApiError> {
    Kind::parse(kind).ok_or(ApiError::NotFound)
}

async fn create_entry(
    State(svc): State<AppState>,
    Path(kind): Path<String>,
    Json(draft): Json<EntryDraft>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let kind = parse_kind(&kind)?;
    let entry = svc.create(kind, draft)?;
    tracing::info!(kind = kind.as_str(), id = %entry.id, "entry created");
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": format!("{} entry added", kind.label()),
            "data": entry,
        })),
    ))
}

/// Inward listings are paginated and wrapped in an envelope; the other
/// kinds return the bare array.
async fn list_entries(
    State(svc): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = parse_kind(&kind)?;
    let body = match kind {
        Kind::Inward => {
            let (entries, pagination) = svc.list_paged(kind, &params)?;
            serde_json::json!({ "data": entries, "pagination": pagination })
        }
        _ => serde_json::json!(svc.list(kind)?),
    };
    Ok(Json(body))
}

async fn delete_entry(
    State(svc): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = parse_kind(&kind)?;
    svc.delete(kind, &id)?;
    tracing::info!(kind = kind.as_str(), id = %id, "entry deleted");
    Ok(Json(serde_json::json!({
        "message": format!("{} entry deleted", kind.label()),
    })))
}

/// All four tables at once, for the printable reports page.
async fn reports(State(svc): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let report = svc.report().await?;
    Ok(Json(serde_json::json!({
        "inwardData": report.inward,
        "outwardData": report.outward,
        "returnData": report.returns,
        "expiryData": report.expiry,
    })))
}
