use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::OtpRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOtpError {
    NoRecord,
    Expired,
    Mismatch,
}

impl VerifyOtpError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoRecord => "No OTP found. Please request again.",
            Self::Expired => "OTP expired. Please request a new one.",
            Self::Mismatch => "Invalid OTP. Please try again.",
        }
    }
}

/// In memory store keeping at most one active code per email
#[derive(Debug, Default)]
pub struct OtpStore {
    records: RwLock<HashMap<String, OtpRecord>>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Store a fresh record for the email replacing any previous one
    pub async fn put(&self, email: &str, code: &str) {
        let record = OtpRecord::new(code);
        self.records.write().await.insert(email.to_owned(), record);
    }

    /// Fetch a copy of the record for the email
    pub async fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.read().await.get(email).cloned()
    }

    /// Check the submitted code and delete the record when it matches.
    /// Expired records are deleted on sight, a mismatched code leaves
    /// the record in place. The check and the delete happen under a
    /// single write lock so a code can never be accepted twice.
    pub async fn consume(
        &self,
        email: &str,
        code: &str,
        now_ms: u64,
    ) -> Result<(), VerifyOtpError> {
        let mut records = self.records.write().await;
        let record = records.get(email).ok_or(VerifyOtpError::NoRecord)?;
        if record.is_expired(now_ms) {
            records.remove(email);
            return Err(VerifyOtpError::Expired);
        }
        if record.code != code {
            return Err(VerifyOtpError::Mismatch);
        }
        records.remove(email);
        Ok(())
    }

    /// Delete all expired records and return how many were removed
    pub async fn sweep_expired(&self, now_ms: u64) -> usize {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !record.is_expired(now_ms));
        before - records.len()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
