use std::collections::BTreeSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::players::SearchQuery;
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::sessions::{NewSession, TrialSession};

#[derive(Debug, Default, Deserialize)]
pub struct ZoneQuery {
    pub zone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpcomingSessionsResponse {
    pub sessions: Vec<TrialSession>,
    /// Distinct zones across all upcoming sessions, for the filter control
    pub zones: Vec<String>,
}

pub(crate) async fn find_session(state: &AppState, id: Uuid) -> Result<TrialSession, ApiError> {
    state
        .sessions
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Session not found"))
}

/// POST /api/sessions
pub async fn create_session(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(req): Json<NewSession>,
) -> Result<(StatusCode, Json<TrialSession>), ApiError> {
    let session = TrialSession::schedule(req)?;
    state.sessions.save(&session).await?;
    tracing::info!(session_id = %session.id, zone = %session.zone, "session scheduled");

    Ok((StatusCode::CREATED, Json(session)))
}

/// Sessions still to come, optionally for one zone
///
/// GET /api/sessions/upcoming?zone=
pub async fn upcoming_sessions(
    State(state): State<AppState>,
    Query(query): Query<ZoneQuery>,
) -> Result<Json<UpcomingSessionsResponse>, ApiError> {
    let now = Utc::now();
    let upcoming: Vec<TrialSession> = state
        .sessions
        .find_all()
        .await?
        .into_iter()
        .filter(|s| s.is_upcoming(now))
        .collect();

    let zones: BTreeSet<String> = upcoming
        .iter()
        .map(|s| s.zone.trim().to_string())
        .filter(|z| !z.is_empty())
        .collect();

    let zone = query.zone.as_deref().map(str::trim).filter(|z| !z.is_empty());
    let sessions = match zone {
        Some(zone) => upcoming.into_iter().filter(|s| s.in_zone(zone)).collect(),
        None => upcoming,
    };

    Ok(Json(UpcomingSessionsResponse {
        sessions,
        zones: zones.into_iter().collect(),
    }))
}

/// GET /api/sessions?q=
pub async fn list_sessions(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<TrialSession>>, ApiError> {
    let needle = query.needle();
    let sessions = state
        .sessions
        .find_all()
        .await?
        .into_iter()
        .filter(|s| s.matches_query(&needle))
        .collect();

    Ok(Json(sessions))
}

/// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TrialSession>, ApiError> {
    Ok(Json(find_session(&state, id).await?))
}

/// Delete a session along with its registrations
///
/// DELETE /api/sessions/:id
pub async fn delete_session(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.delete(id).await?;
    tracing::info!(session_id = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}
