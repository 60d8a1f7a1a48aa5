//! Sign-up form model.
//!
//! Mirrors what the landing page enforces before anything leaves the browser:
//! field validation with inline messages, a bot-verification token that must
//! be present, and at most one submission in flight.

use thiserror::Error;
use validator::ValidateEmail;
use waitlist_types::{JoinWaitlistRequest, WaitlistEntry};

pub use waitlist_types::INVALID_EMAIL_MESSAGE;

use crate::client::WaitlistClient;
use crate::error::ClientError;

pub const NAME_TOO_SHORT_MESSAGE: &str = "Name must be at least 2 characters";

const MIN_FULL_NAME_CHARS: usize = 2;

/// Inline messages per field. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none()
    }
}

/// Reasons a submit is refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form has invalid fields")]
    Invalid(FieldErrors),

    #[error("Bot verification has not completed")]
    MissingToken,

    #[error("A submission is already in progress")]
    InFlight,
}

/// What the page should do after a submission finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Navigate to the confirmation view. The entry is informational only.
    Confirmed(Option<WaitlistEntry>),

    /// Show this message as a transient notification; the form keeps its values.
    Notification(String),
}

#[derive(Debug, Clone, Default)]
pub struct WaitlistForm {
    pub full_name: String,
    pub email: String,
    token: Option<String>,
    in_flight: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the challenge widget produces a token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.token = (!token.is_empty()).then_some(token);
    }

    /// Called when the widget's token expires or errors.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.token.is_some() && !self.in_flight
    }

    /// Both fields are trimmed before checking, the same way the server
    /// trims them before storing.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.full_name.trim().chars().count() < MIN_FULL_NAME_CHARS {
            errors.full_name = Some(NAME_TOO_SHORT_MESSAGE);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.validate_email() {
            errors.email = Some(INVALID_EMAIL_MESSAGE);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks the form and marks it in flight. The returned request is what
    /// goes on the wire.
    pub fn begin_submit(&mut self) -> Result<JoinWaitlistRequest, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        let Some(token) = self.token.clone() else {
            return Err(FormError::MissingToken);
        };
        self.validate().map_err(FormError::Invalid)?;

        self.in_flight = true;
        Ok(JoinWaitlistRequest {
            full_name: Some(self.full_name.clone()),
            email: Some(self.email.clone()),
            token: Some(token),
        })
    }

    /// Clears the in-flight flag and turns the server's answer into an outcome.
    pub fn finish_submit(
        &mut self,
        result: Result<Option<WaitlistEntry>, ClientError>,
    ) -> SubmitOutcome {
        self.in_flight = false;
        match result {
            Ok(entry) => SubmitOutcome::Confirmed(entry),
            Err(err) => SubmitOutcome::Notification(err.to_string()),
        }
    }

    /// Validates locally, then makes exactly one request. No retries.
    pub async fn submit(&mut self, client: &WaitlistClient) -> Result<SubmitOutcome, FormError> {
        let request = self.begin_submit()?;
        let result = client.join(&request).await;
        Ok(self.finish_submit(result))
    }
}
