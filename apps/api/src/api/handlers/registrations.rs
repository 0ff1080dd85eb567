use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use super::csv_attachment;
use super::players::SearchQuery;
use super::sessions::find_session;
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::sessions::{Registration, RegistrationForm};
use crate::exports::registrations_csv;

#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub id: Uuid,
    pub approved: bool,
}

/// Sign up for a session, subject to its capacity
///
/// POST /api/sessions/:id/registrations
pub async fn register_for_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(form): Json<RegistrationForm>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let session = find_session(&state, session_id).await?;
    let registration = Registration::sign_up(session.id, &form)?;

    // TODO: count and insert are separate calls, so two sign-ups racing for
    // the last place can both succeed; move into a single conditional insert.
    let registered = state.registrations.count_by_session(session.id).await?;
    if session.is_full(registered as usize) {
        return Err(ApiError::conflict("Session is full"));
    }

    state.registrations.save(&registration).await?;
    tracing::info!(%session_id, registration_id = %registration.id, "registration accepted");

    Ok((StatusCode::CREATED, Json(registration)))
}

/// Participants of a session, oldest first, optionally filtered by `q`
///
/// GET /api/sessions/:id/registrations?q=
pub async fn list_registrations(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let session = find_session(&state, session_id).await?;
    let needle = query.needle();
    let registrations = state
        .registrations
        .find_by_session(session.id)
        .await?
        .into_iter()
        .filter(|r| r.matches_query(&needle))
        .collect();

    Ok(Json(registrations))
}

/// POST /api/registrations/:id/approval
pub async fn toggle_approval(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let mut registration = state
        .registrations
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Registration not found"))?;

    let approved = registration.toggle_approved();
    state.registrations.save(&registration).await?;

    Ok(Json(ApprovalResponse { id, approved }))
}

/// DELETE /api/registrations/:id
pub async fn delete_registration(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.registrations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/:id/registrations.csv
pub async fn registrations_export(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let session = find_session(&state, session_id).await?;
    let registrations = state.registrations.find_by_session(session.id).await?;

    csv_attachment(
        &format!("registrations_{}.csv", session.id),
        registrations_csv(&registrations),
    )
}
