use crate::{constants::*, utils::get_epoch_ms};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub code: String,
    pub expires_at: u64,
}

impl OtpRecord {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            expires_at: get_epoch_ms() + OTP_VALIDITY_MINS * 60 * 1000,
        }
    }

    /// a record is expired only when the timestamp is strictly past expires_at
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_expiry_boundary() {
        let record = OtpRecord::new("123456");
        assert_eq!(record.is_expired(record.expires_at - 1), false);
        assert_eq!(record.is_expired(record.expires_at), false);
        assert_eq!(record.is_expired(record.expires_at + 1), true);
    }

    #[test]
    fn test_record_validity_window() {
        let before = get_epoch_ms();
        let record = OtpRecord::new("123456");
        let after = get_epoch_ms();
        let window = OTP_VALIDITY_MINS * 60 * 1000;
        assert_eq!(record.expires_at >= before + window, true);
        assert_eq!(record.expires_at <= after + window, true);
    }
}
