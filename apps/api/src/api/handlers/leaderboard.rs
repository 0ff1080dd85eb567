use axum::{extract::State, response::Response, Json};

use super::csv_attachment;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::matches::normalize_all;
use crate::domain::standings::{compute_standings, Standings};
use crate::exports::leaderboard_csv;

/// Fetch teams and matches, then aggregate
async fn load_standings(state: &AppState) -> Result<Standings, ApiError> {
    let teams = state.teams.find_all().await?;
    let docs = state.matches.find_all().await?;

    let (records, skipped) = normalize_all(&docs);
    let standings = compute_standings(&teams, &records);

    tracing::info!(
        mode = ?standings.mode,
        teams = teams.len(),
        matches = records.len(),
        skipped,
        "standings computed"
    );

    Ok(standings)
}

/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<Json<Standings>, ApiError> {
    Ok(Json(load_standings(&state).await?))
}

/// GET /api/leaderboard.csv
pub async fn leaderboard_export(State(state): State<AppState>) -> Result<Response, ApiError> {
    let standings = load_standings(&state).await?;
    csv_attachment("leaderboard.csv", leaderboard_csv(&standings))
}
