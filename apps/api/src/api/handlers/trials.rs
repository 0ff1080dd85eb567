use axum::{extract::State, http::StatusCode, Json};

use crate::api::errors::ApiError;
use crate::api::middleware::AdminAuth;
use crate::api::state::AppState;
use crate::domain::trial::{TrialForm, TrialSignup};

/// POST /api/trials
pub async fn submit_trial(
    State(state): State<AppState>,
    Json(form): Json<TrialForm>,
) -> Result<(StatusCode, Json<TrialSignup>), ApiError> {
    let trial = TrialSignup::submit(&form)?;
    state.trials.save(&trial).await?;
    tracing::info!(trial_id = %trial.id, zone = %trial.zone, "trial sign-up received");

    Ok((StatusCode::CREATED, Json(trial)))
}

/// GET /api/trials
pub async fn list_trials(
    _admin: AdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<TrialSignup>>, ApiError> {
    Ok(Json(state.trials.find_all().await?))
}
