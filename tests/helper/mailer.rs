use axum::async_trait;
use tokio::sync::Mutex;

use dashboard_auth_backend_rust::mailer::CodeMailer;

/// Mailer capturing every dispatched code instead of sending it out
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl CodeMailer for RecordingMailer {
    async fn send_login_code(&self, to: &str, code: &str) -> anyhow::Result<()> {
        let mail = (to.to_owned(), code.to_owned());
        self.sent.lock().await.push(mail);
        Ok(())
    }
}

/// Mailer failing every dispatch
pub struct FailingMailer;

#[async_trait]
impl CodeMailer for FailingMailer {
    async fn send_login_code(&self, _to: &str, _code: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("SMTP connection refused"))
    }
}
