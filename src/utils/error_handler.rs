use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::MessageResponse;

#[derive(Debug)]
pub enum AppError {
    BadRequestErr(String),
    Forbidden(String),
    EmailSend(anyhow::Error),
    AnyError(anyhow::Error),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequestErr(msg) => {
                tracing::debug!("Bad request: {}", msg);
                let response = MessageResponse { message: msg };
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            Self::Forbidden(msg) => {
                tracing::debug!("Forbidden: {}", msg);
                let response = MessageResponse { message: msg };
                (StatusCode::FORBIDDEN, Json(response)).into_response()
            }
            Self::EmailSend(err) => {
                tracing::error!("Email send error: {:?}", err);
                let response = MessageResponse {
                    message: "Failed to send email.".to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
            Self::AnyError(err) => {
                let msg = format!("Something went wrong: {err}");
                tracing::debug!("{msg}");
                let response = MessageResponse { message: msg };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
        }
    }
}
