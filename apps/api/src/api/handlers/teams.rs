use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::players::PlayerResponse;
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::errors::ValidationError;
use crate::domain::player::{Player, PlayerDetails};
use crate::domain::repositories::RepositoryError;
use crate::domain::team::{SeasonTotals, Team};

/// Request body for team registration
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(default)]
    pub name: String,
    pub zone: Option<String>,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub players: Vec<PlayerDetails>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub zone: Option<String>,
    pub contact_email: Option<String>,
    pub season: SeasonTotals,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            zone: team.zone().map(str::to_string),
            contact_email: team.contact_email().map(|e| e.as_str().to_string()),
            season: *team.season(),
            created_at: team.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
    pub players: Vec<PlayerResponse>,
}

/// Register a team together with its squad
///
/// Everything is validated before anything is stored, so a bad player row
/// leaves no partial team behind.
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<CreateTeamResponse>), ApiError> {
    let team = Team::register(&req.name, req.zone.as_deref(), &req.contact_email)?;

    let players = req
        .players
        .iter()
        .enumerate()
        .map(|(i, details)| {
            Player::enroll(Some(team.id()), details)
                .map_err(|e| ValidationError::for_player(i + 1, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    state.teams.save(&team).await?;
    for player in &players {
        state.players.save(player).await?;
    }
    tracing::info!(team_id = %team.id(), players = players.len(), "team registered");

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            team: TeamResponse::from(&team),
            players: players
                .iter()
                .map(|p| PlayerResponse::new(p, Some(team.name())))
                .collect(),
        }),
    ))
}

/// List all teams, oldest first
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.find_all().await?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team; its players stay registered without a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await.map_err(|e| match e {
        RepositoryError::NotFound { .. } => ApiError::not_found("Team not found"),
        other => other.into(),
    })?;
    tracing::info!(team_id = %id, "team deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Replace the pre-aggregated season totals used by direct-mode standings
///
/// PUT /api/teams/:id/season
pub async fn update_season(
    _admin: AdminAuth,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(totals): Json<SeasonTotals>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.update_season(id, totals).await?;
    Ok(Json(TeamResponse::from(&team)))
}
