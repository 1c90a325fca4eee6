use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    models::MessageResponse,
    state::AppState,
    utils::{get_epoch_ms, AppError},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpReq {
    email: String,
    otp: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub email: String,
}

/// Verify login OTP
///
/// Checks the submitted code against the stored one for the email.
/// A matching code is consumed and cannot be used a second time.
#[utoipa::path(
    post,
    path = "/api/verify-otp",
    request_body = VerifyOtpReq,
    responses(
        (status = 200, description = "Login successful", body = VerifyOtpResponse),
        (status = 400, description = "Missing, expired or invalid OTP", body = MessageResponse)
    ),
    tag = "Auth API"
)]
pub async fn verify_otp_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VerifyOtpReq>,
) -> Result<Json<VerifyOtpResponse>, AppError> {
    state
        .otp_store
        .consume(&body.email, &body.otp, get_epoch_ms())
        .await
        .map_err(|err| AppError::BadRequestErr(err.message().to_owned()))?;
    let response = VerifyOtpResponse {
        message: "Login successful!".to_owned(),
        email: body.email,
    };
    Ok(Json(response))
}
