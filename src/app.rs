use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, IntoMakeService};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::constants::*;
use crate::handlers::*;
use crate::state::AppState;
use crate::swagger::ApiDoc;

pub fn build_app(state: Arc<AppState>) -> IntoMakeService<Router> {
    build_router(state).into_make_service()
}

pub fn build_router(state: Arc<AppState>) -> Router {
    tracing::debug!("Initializing the app");
    Router::new()
        .route("/", get(default_route_handler))
        .route("/api/ping", get(ping_handler))
        .route("/api/send-otp", post(send_otp_handler))
        .route("/api/verify-otp", post(verify_otp_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(global_404_handler)
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cors layer allowing the configured client origin to call the API
fn build_cors_layer() -> CorsLayer {
    let client_url = std::env::var("CLIENT_URL").unwrap_or(DEFAULT_CLIENT_URL.to_owned());
    let origin = client_url
        .parse::<HeaderValue>()
        .expect("CLIENT_URL is not a valid origin");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
