use axum::{extract::State, response::Response, Json};
use serde::Serialize;

use super::csv_attachment;
use super::players::{team_name_of, team_names};
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::exports::{players_csv, users_csv};

#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub users: u64,
    pub teams: u64,
    pub players: u64,
    pub trials: u64,
}

/// GET /api/admin/dashboard
pub async fn dashboard(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<DashboardCounts>, ApiError> {
    Ok(Json(DashboardCounts {
        users: state.users.count().await?,
        teams: state.teams.count().await?,
        players: state.players.count().await?,
        trials: state.trials.count().await?,
    }))
}

/// GET /api/admin/export/players.csv
pub async fn export_players(_admin: AdminAuth, State(state): State<AppState>) -> Result<Response, ApiError> {
    let players = state.players.find_all().await?;
    let names = team_names(&state).await?;

    csv_attachment(
        "players.csv",
        players_csv(players.iter().map(|p| (p, team_name_of(&names, p)))),
    )
}

/// GET /api/admin/export/users.csv
pub async fn export_users(_admin: AdminAuth, State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.users.find_all().await?;
    csv_attachment("users.csv", users_csv(&users))
}
