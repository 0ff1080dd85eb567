use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::player::Player;
use crate::domain::repositories::RepositoryResult;

/// Shown when a player's team no longer exists
pub const UNKNOWN_TEAM: &str = "Unknown";

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: Uuid,
    pub team_id: Option<Uuid>,
    pub team_name: String,
    pub name: String,
    pub age: u32,
    pub aadhaar: Option<String>,
    pub phone: Option<String>,
    pub preferred_role: Option<String>,
    pub checked_in: bool,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PlayerResponse {
    pub fn new(player: &Player, team_name: Option<&str>) -> Self {
        Self {
            id: player.id(),
            team_id: player.team_id(),
            team_name: team_name.unwrap_or(UNKNOWN_TEAM).to_string(),
            name: player.name().to_string(),
            age: player.age().years(),
            aadhaar: player.aadhaar().map(|a| a.as_str().to_string()),
            phone: player.phone().map(str::to_string),
            preferred_role: player.preferred_role().map(str::to_string),
            checked_in: player.checked_in(),
            checked_in_at: player.checked_in_at(),
            created_at: player.created_at(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Lowercased, trimmed needle; empty matches everything
    pub fn needle(&self) -> String {
        self.q.as_deref().unwrap_or("").trim().to_lowercase()
    }
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub total: usize,
    pub shown: usize,
    pub players: Vec<PlayerResponse>,
}

/// Team id to name map for decorating player listings
pub(crate) async fn team_names(state: &AppState) -> RepositoryResult<HashMap<Uuid, String>> {
    Ok(state
        .teams
        .find_all()
        .await?
        .into_iter()
        .map(|t| (t.id(), t.name().to_string()))
        .collect())
}

pub(crate) fn team_name_of<'a>(names: &'a HashMap<Uuid, String>, player: &Player) -> Option<&'a str> {
    player
        .team_id()
        .and_then(|id| names.get(&id))
        .map(String::as_str)
}

/// Players newest first, optionally filtered by `q`
///
/// GET /api/players?q=
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let players = state.players.find_all().await?;
    let names = team_names(&state).await?;
    let needle = query.needle();

    let shown: Vec<PlayerResponse> = players
        .iter()
        .filter(|p| p.matches_query(Some(team_name_of(&names, p).unwrap_or(UNKNOWN_TEAM)), &needle))
        .map(|p| PlayerResponse::new(p, team_name_of(&names, p)))
        .collect();

    Ok(Json(PlayerListResponse {
        total: players.len(),
        shown: shown.len(),
        players: shown,
    }))
}

/// DELETE /api/players/:id
pub async fn delete_player(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.players.delete(id).await?;
    tracing::info!(player_id = %id, "player deleted");
    Ok(StatusCode::NO_CONTENT)
}
