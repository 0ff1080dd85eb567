use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::domain::identity::Aadhaar;

#[derive(Debug, Deserialize)]
pub struct VerifyAadhaarRequest {
    #[serde(default)]
    pub aadhaar: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyAadhaarResponse {
    pub valid: bool,
    pub message: String,
}

/// Format plus Verhoeff checksum verification
///
/// POST /api/aadhaar/verify
pub async fn verify_aadhaar(
    Json(req): Json<VerifyAadhaarRequest>,
) -> (StatusCode, Json<VerifyAadhaarResponse>) {
    let (status, valid, message) = match Aadhaar::parse(&req.aadhaar) {
        Err(e) => (StatusCode::BAD_REQUEST, false, e.to_string()),
        Ok(aadhaar) if !aadhaar.has_valid_checksum() => {
            (StatusCode::BAD_REQUEST, false, "Invalid Aadhaar number".to_string())
        }
        Ok(_) => (StatusCode::OK, true, "Aadhaar verified successfully".to_string()),
    };

    (status, Json(VerifyAadhaarResponse { valid, message }))
}
