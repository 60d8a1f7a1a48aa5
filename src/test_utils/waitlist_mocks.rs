//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{CaptchaVerifier, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
///
/// `insert` enforces email uniqueness the way the database constraint does.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    hide_lookups: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            hide_lookups: false,
        }
    }

    /// Make `find_by_email` always miss, simulating two requests that both
    /// pass the duplicate check before either inserts.
    pub fn hiding_lookups(mut self) -> Self {
        self.hide_lookups = true;
        self
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count_by_email(&self, email: &str) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.email == email)
            .count()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        if self.hide_lookups {
            return Ok(None);
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries.iter().any(|e| e.email == entry.email) {
            return Err(AppError::email_taken());
        }

        let created = WaitlistEntry {
            id: Uuid::new_v4(),
            full_name: entry.full_name.clone(),
            email: entry.email.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        entries.push(created.clone());
        Ok(created)
    }
}

/// Repo whose every call fails like an unreachable database.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Database("connection refused".into()))
    }

    async fn insert(&self, _entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry> {
        Err(AppError::Database("connection refused".into()))
    }
}

// ============================================================================
// StaticCaptchaVerifier
// ============================================================================

/// Captcha verifier with a fixed answer that records every call.
pub struct StaticCaptchaVerifier {
    accept: bool,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl StaticCaptchaVerifier {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            calls: Mutex::new(vec![]),
        }
    }

    /// `(token, remote_ip)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptchaVerifier for StaticCaptchaVerifier {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push((token.to_string(), remote_ip.map(String::from)));
        self.accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_entry;

    #[tokio::test]
    async fn test_repo_insert_enforces_unique_email() {
        let repo = InMemoryWaitlistRepo::new();
        let new_entry = NewWaitlistEntry {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        };

        repo.insert(&new_entry).await.unwrap();
        let err = repo.insert(&new_entry).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.count_by_email("jane@example.com"), 1);
    }

    #[tokio::test]
    async fn test_repo_find_by_email() {
        let entry = create_test_entry(|e| e.email = "alice@example.com".to_string());
        let repo = InMemoryWaitlistRepo::with_entries(vec![entry.clone()]);

        assert_eq!(
            repo.find_by_email("alice@example.com").await.unwrap(),
            Some(entry)
        );
        assert_eq!(repo.find_by_email("bob@example.com").await.unwrap(), None);
    }
}
