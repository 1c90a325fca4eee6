use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::GenericResponse;

/// Default route
///
/// Returns a static response confirming the server is up
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Get success response from server", body = GenericResponse)
    ),
    tag = "Debugging API"
)]
pub async fn default_route_handler() -> impl IntoResponse {
    let response = GenericResponse {
        success: true,
        message: "Server is running".to_string(),
    };
    (StatusCode::OK, Json(response))
}
