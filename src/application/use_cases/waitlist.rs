use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::is_valid_email;
use crate::domain::entities::waitlist_entry::{NewEntryError, NewWaitlistEntry, WaitlistEntry};
use waitlist_types::{CAPTCHA_FAILED_MESSAGE, INVALID_EMAIL_MESSAGE};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// Inserts a new entry. A unique violation on `email` must come back as
    /// `AppError::Conflict`.
    async fn insert(&self, entry: &NewWaitlistEntry) -> AppResult<WaitlistEntry>;
}

/// Bot-check token verification.
///
/// Implementations fail closed: any transport or decoding problem is
/// reported as `false`.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str, remote_ip: Option<&str>) -> bool;
}

/// One sign-up attempt as received from the landing page.
#[derive(Debug, Clone, Default)]
pub struct JoinWaitlistInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    pub remote_ip: Option<String>,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    captcha: Arc<dyn CaptchaVerifier>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, captcha: Arc<dyn CaptchaVerifier>) -> Self {
        Self { repo, captcha }
    }

    /// Checks required fields, then the bot token, then the email format,
    /// guards against duplicates and stores the entry. Each step
    /// short-circuits with its own error.
    #[instrument(skip(self, input), fields(email = ?input.email, remote_ip = ?input.remote_ip))]
    pub async fn join(&self, input: JoinWaitlistInput) -> AppResult<WaitlistEntry> {
        let new_entry = NewWaitlistEntry::parse(input.full_name.as_deref(), input.email.as_deref())
            .map_err(|err| match err {
                NewEntryError::MissingFields => AppError::missing_fields(),
            })?;

        // An absent or empty token skips verification entirely.
        if let Some(token) = input.token.as_deref().filter(|t| !t.is_empty())
            && !self.captcha.verify(token, input.remote_ip.as_deref()).await
        {
            tracing::info!("Bot verification rejected the token");
            return Err(AppError::Validation(CAPTCHA_FAILED_MESSAGE.into()));
        }

        // Format is only judged once the bot check passed, so a rejected
        // token always reports the CAPTCHA message.
        if !is_valid_email(&new_entry.email) {
            return Err(AppError::Validation(INVALID_EMAIL_MESSAGE.into()));
        }

        // Fast path for a friendly message; the unique constraint is the real guard.
        if self.repo.find_by_email(&new_entry.email).await?.is_some() {
            return Err(AppError::email_taken());
        }

        let entry = self.repo.insert(&new_entry).await?;
        tracing::info!(entry_id = %entry.id, "Waitlist entry created");
        Ok(entry)
    }
}
