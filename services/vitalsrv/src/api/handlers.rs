use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::response::success_response;

use super::AppState;

pub async fn health_check() -> impl IntoResponse {
    success_response(json!({
        "status": "healthy",
        "service": "vitalsrv",
    }))
}

/// Latest reading. 404 until the sampler has produced one.
pub async fn current_vitals(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let reading = state
        .sampler
        .current()
        .ok_or_else(|| ApiError::NotFound("no vitals reading yet".to_string()))?;
    Ok(success_response(reading))
}

pub async fn vitals_history(State(state): State<AppState>) -> impl IntoResponse {
    success_response(state.sampler.history())
}

#[derive(Deserialize)]
pub struct NotificationQuery {
    #[serde(default)]
    pub unread: bool,
}

pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> impl IntoResponse {
    let events = state.center.list(query.unread);
    success_response(json!({
        "events": events,
        "unreadCount": state.center.unread_count(),
    }))
}

pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let changed = state
        .center
        .mark_read(&id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown notification: {id}")))?;
    Ok(success_response(json!({
        "id": id,
        "isRead": true,
        "changed": changed,
    })))
}

pub async fn presence_hidden(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    state.presence.record_hidden(Utc::now())?;
    Ok(success_response(json!({ "hidden": true })))
}

pub async fn presence_visible(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let re_engaged = state.presence.record_visible(Utc::now())?;
    Ok(success_response(json!({ "reEngaged": re_engaged })))
}
