use axum::{extract::State, response::Response, Json};
use serde::Serialize;

use super::csv_attachment;
use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::import::{line_number, parse_rows, ImportResult, ImportRow};
use crate::domain::player::Player;
use crate::domain::team::Team;
use crate::exports::{import_errors_csv, import_template_csv};

#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub created: usize,
    pub errors: usize,
    pub results: Vec<ImportResult>,
}

/// Row checks only; nothing is stored
fn dry_run(rows: Vec<ImportRow>) -> Vec<ImportResult> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(i, row)| match row.check() {
            Ok(()) => None,
            Err(e) => Some(ImportResult::failed(line_number(i), row, e.to_string())),
        })
        .collect()
}

/// Finds a team by name among `known`, creating and remembering it on first use
async fn resolve_team(state: &AppState, known: &mut Vec<Team>, name: &str) -> Result<Team, String> {
    if let Some(team) = known.iter().find(|t| t.is_named(name)) {
        return Ok(team.clone());
    }
    let team = Team::named(name).map_err(|e| e.to_string())?;
    state.teams.save(&team).await.map_err(|e| e.to_string())?;
    tracing::info!(team_id = %team.id(), name = %team.name(), "team created by import");
    known.push(team.clone());
    Ok(team)
}

async fn import_row(state: &AppState, known: &mut Vec<Team>, row: &ImportRow) -> Result<Player, String> {
    row.check().map_err(|e| e.to_string())?;

    let team_id = match row.team() {
        Some(name) => Some(resolve_team(state, known, name).await?.id()),
        None => None,
    };

    let player = Player::enroll(team_id, &row.details()).map_err(|e| e.to_string())?;
    state.players.save(&player).await.map_err(|e| e.to_string())?;
    Ok(player)
}

/// Bulk-create players from CSV; bad rows are reported, never fatal
///
/// POST /api/import/players
pub async fn import_players(
    _admin: AdminAuth,
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportSummary>, ApiError> {
    let rows = parse_rows(&body)?;
    let mut known = state.teams.find_all().await?;

    let mut results = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let result = match import_row(&state, &mut known, &row).await {
            Ok(player) => ImportResult::created(line_number(i), row, player.id()),
            Err(error) => ImportResult::failed(line_number(i), row, error),
        };
        results.push(result);
    }

    let created = results.iter().filter(|r| r.ok).count();
    let errors = results.len() - created;
    tracing::info!(created, errors, "player import finished");

    Ok(Json(ImportSummary {
        created,
        errors,
        results,
    }))
}

/// Failing rows of an upload as CSV, without importing anything
///
/// POST /api/import/players/errors.csv
pub async fn import_errors_export(_admin: AdminAuth, body: String) -> Result<Response, ApiError> {
    let failures = dry_run(parse_rows(&body)?);
    csv_attachment("import_errors.csv", import_errors_csv(&failures))
}

/// GET /api/import/template.csv
pub async fn template() -> Result<Response, ApiError> {
    csv_attachment("players_template.csv", import_template_csv())
}
