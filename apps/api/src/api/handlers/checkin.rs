use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::players::{team_name_of, team_names, PlayerResponse};
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::checkin::{badge_file_stem, player_id_from_payload};
use crate::domain::player::Player;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub payload: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: String,
    pub player: PlayerResponse,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: Uuid,
    pub checked_in: bool,
}

#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub player_id: Uuid,
    /// Text to encode in the QR image
    pub payload: String,
    pub file_stem: String,
}

async fn find_player(state: &AppState, id: Uuid) -> Result<Player, ApiError> {
    state
        .players
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player not found"))
}

/// Check a player in from a scanned badge
///
/// POST /api/checkin/scan
pub async fn scan(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, ApiError> {
    let raw_id = player_id_from_payload(&req.payload);
    let not_found = || ApiError::not_found(format!("Player not found for id: {}", raw_id));

    let id = Uuid::parse_str(&raw_id).map_err(|_| not_found())?;
    let mut player = state.players.find_by_id(id).await?.ok_or_else(not_found)?;

    player.check_in(Utc::now());
    state.players.save(&player).await?;
    tracing::info!(player_id = %id, "player checked in");

    let team_name = match player.team_id() {
        Some(team_id) => state.teams.find_by_id(team_id).await?.map(|t| t.name().to_string()),
        None => None,
    };

    Ok(Json(ScanResponse {
        message: format!("Player checked in: {}", player.name()),
        player: PlayerResponse::new(&player, team_name.as_deref()),
    }))
}

/// Flip the checked-in flag by hand
///
/// POST /api/players/:id/checkin/toggle
pub async fn toggle(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let mut player = find_player(&state, id).await?;
    let checked_in = player.toggle_checked_in();
    state.players.save(&player).await?;

    Ok(Json(ToggleResponse { id, checked_in }))
}

/// Everyone on the roster, checked-in players first, then by name
///
/// GET /api/checkin
pub async fn roster(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let mut players = state.players.find_all().await?;
    let names = team_names(&state).await?;

    players.sort_by(|a, b| {
        b.checked_in()
            .cmp(&a.checked_in())
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    });

    Ok(Json(
        players
            .iter()
            .map(|p| PlayerResponse::new(p, team_name_of(&names, p)))
            .collect(),
    ))
}

/// GET /api/players/:id/qr
pub async fn badge(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BadgeResponse>, ApiError> {
    let player = find_player(&state, id).await?;
    let payload = player.id().to_string();

    Ok(Json(BadgeResponse {
        player_id: player.id(),
        file_stem: badge_file_stem(player.name(), &payload),
        payload,
    }))
}
