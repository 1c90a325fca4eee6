use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    models::MessageResponse,
    state::AppState,
    utils::{extract_domain, generate_otp, AppError},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendOtpReq {
    email: String,
}

/// Send login OTP
///
/// Generates a login code for the given email and dispatches it to the
/// mailbox. Only emails from the allowed domain are accepted.
#[utoipa::path(
    post,
    path = "/api/send-otp",
    request_body = SendOtpReq,
    responses(
        (status = 200, description = "OTP dispatched to the mailbox", body = MessageResponse),
        (status = 403, description = "Email domain is not allowed", body = MessageResponse),
        (status = 500, description = "Email dispatch failed", body = MessageResponse)
    ),
    tag = "Auth API"
)]
pub async fn send_otp_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SendOtpReq>,
) -> Result<Json<MessageResponse>, AppError> {
    // check the email belongs to the company domain
    check_email_domain(&body.email, &state.allowed_domain)?;
    let otp = generate_otp();
    // the new record replaces any previous one even when the dispatch fails
    state.otp_store.put(&body.email, &otp).await;
    state
        .mailer
        .send_login_code(&body.email, &otp)
        .await
        .map_err(AppError::EmailSend)?;
    let response = MessageResponse {
        message: "OTP sent successfully!".to_owned(),
    };
    Ok(Json(response))
}

/// check the email address belongs to the allowed domain
pub fn check_email_domain(email: &str, allowed_domain: &str) -> Result<(), AppError> {
    let domain = extract_domain(email);
    if domain != Some(allowed_domain) {
        let err = "Access denied. Use your company email.".to_owned();
        return Err(AppError::Forbidden(err));
    }
    Ok(())
}


// --------------------------------------------------------------------------
// Tests
// - empty object in request body -> 422 Unprocessable Entity
// - request body without `email` field -> 422 Unprocessable Entity
// - email from a different domain -> 403 Forbidden
// - email without any domain part -> 403 Forbidden
// - email from the allowed domain -> 200 & a new record in the store
// - email dispatch failure -> 500 & the record stays in the store
// --------------------------------------------------------------------------
