use std::sync::Arc;

use crate::mailer::{CodeMailer, SmtpMailer};
use crate::store::OtpStore;

/// Shared state handed to every request handler
pub struct AppState {
    pub otp_store: OtpStore,
    pub mailer: Arc<dyn CodeMailer>,
    pub allowed_domain: String,
}

impl AppState {
    pub fn new(mailer: Arc<dyn CodeMailer>, allowed_domain: &str) -> Self {
        Self {
            otp_store: OtpStore::new(),
            mailer,
            allowed_domain: allowed_domain.to_owned(),
        }
    }

    /// Build the state for the running server from environment variables
    /// when the allowed domain is not found it should panic
    pub fn from_env() -> anyhow::Result<Self> {
        let allowed_domain =
            std::env::var("ALLOWED_DOMAIN").expect("ALLOWED_DOMAIN not found in .env file");
        let mailer = SmtpMailer::from_env()?;
        Ok(Self::new(Arc::new(mailer), &allowed_domain))
    }
}
