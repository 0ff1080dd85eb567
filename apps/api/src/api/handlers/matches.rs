use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::errors::ValidationError;
use crate::domain::matches::{normalize_match, MatchDocument};

/// Store a match document as sent
///
/// Any object shape is kept, but it must normalize to a record naming two
/// distinct teams.
///
/// POST /api/matches
pub async fn create_match(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<MatchDocument>), ApiError> {
    if !body.is_object() {
        return Err(ApiError::bad_request("Match must be a JSON object"));
    }

    let id = Uuid::new_v4();
    if normalize_match(id, &body).is_none() {
        return Err(ValidationError::MatchTeams.into());
    }

    let doc = MatchDocument {
        id,
        body,
        created_at: Utc::now(),
    };
    state.matches.insert(&doc).await?;
    tracing::info!(match_id = %id, "match recorded");

    Ok((StatusCode::CREATED, Json(doc)))
}

/// Raw match documents, oldest first
///
/// GET /api/matches
pub async fn list_matches(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchDocument>>, ApiError> {
    Ok(Json(state.matches.find_all().await?))
}
