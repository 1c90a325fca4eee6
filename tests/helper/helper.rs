use axum::{body::Body, http::Request};
use std::sync::Arc;

use dashboard_auth_backend_rust::state::AppState;

use super::mailer::{FailingMailer, RecordingMailer};

/// Build an app state backed by a recording mailer
pub fn recording_state(allowed_domain: &str) -> (Arc<AppState>, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    let state = Arc::new(AppState::new(mailer.clone(), allowed_domain));
    (state, mailer)
}

/// Build an app state whose mailer fails every dispatch
pub fn failing_state(allowed_domain: &str) -> Arc<AppState> {
    let state = AppState::new(Arc::new(FailingMailer), allowed_domain);
    Arc::new(state)
}

pub fn build_post_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}
