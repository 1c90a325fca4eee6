use axum::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::constants::*;

/// Delivers login codes to mailboxes
#[async_trait]
pub trait CodeMailer: Send + Sync {
    async fn send_login_code(&self, to: &str, code: &str) -> anyhow::Result<()>;
}

/// SMTP backed mailer used by the running server
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn from_env() -> anyhow::Result<Self> {
        // get the mail account from environment
        // when the credentials are not found it should panic
        let user = std::env::var("EMAIL_USER").expect("EMAIL_USER not found in .env file");
        let pass = std::env::var("EMAIL_PASS").expect("EMAIL_PASS not found in .env file");
        let host = std::env::var("SMTP_HOST").unwrap_or(DEFAULT_SMTP_HOST.to_owned());
        let from = Mailbox::new(Some(EMAIL_FROM_NAME.to_owned()), user.parse()?);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?
            .credentials(Credentials::new(user, pass))
            .build();
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl CodeMailer for SmtpMailer {
    async fn send_login_code(&self, to: &str, code: &str) -> anyhow::Result<()> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(EMAIL_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(login_code_html(code))?;
        self.transport.send(email).await?;
        Ok(())
    }
}

/// HTML body of the login code email
pub fn login_code_html(code: &str) -> String {
    format!(
        r#"
        <div style="font-family:sans-serif;max-width:400px;margin:auto;padding:30px;border:1px solid #eee;border-radius:10px">
          <h2 style="color:#4F46E5">Dashboard Login Code</h2>
          <p>Use the code below to login. It expires in <b>{OTP_VALIDITY_MINS} minutes</b>.</p>
          <div style="font-size:36px;font-weight:bold;letter-spacing:8px;color:#333;text-align:center;padding:20px;background:#f4f6f9;border-radius:8px">
            {code}
          </div>
          <p style="color:#999;font-size:12px;margin-top:20px">If you didn't request this, ignore this email.</p>
        </div>
        "#
    )
}
