pub const OTP_LENGTH: u32 = 6;
pub const OTP_VALIDITY_MINS: u64 = 10;
// pub const CLEANUP_JOB_INTERVAL: u64 = 30;
pub const CLEANUP_JOB_INTERVAL: u64 = 15 * 60;

pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

pub const EMAIL_FROM_NAME: &str = "Dashboard Access";
pub const EMAIL_SUBJECT: &str = "Your Dashboard Login Code";
