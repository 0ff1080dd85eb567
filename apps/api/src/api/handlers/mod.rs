// HTTP handlers, one module per resource

pub mod aadhaar;
pub mod auth;
pub mod checkin;
pub mod dashboard;
pub mod import;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod registrations;
pub mod sessions;
pub mod teams;
pub mod trials;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::errors::ApiError;

/// Wraps rendered CSV as a downloadable attachment
pub(crate) fn csv_attachment(filename: &str, rendered: csv::Result<String>) -> Result<Response, ApiError> {
    let body = rendered
        .map_err(|e| ApiError::internal_server_error(format!("Failed to render CSV: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response())
}
