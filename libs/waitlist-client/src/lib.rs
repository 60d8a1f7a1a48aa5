//! Client side of the waitlist sign-up.
//!
//! # Features
//!
//! - **Form model** - local validation, token gating and in-flight tracking
//!   for the sign-up form (`WaitlistForm`)
//! - **HTTP client** - submits the form to `POST /api/waitlist` and reads the
//!   challenge widget settings (`WaitlistClient`)
//!
//! # Example
//!
//! ```rust,ignore
//! use waitlist_client::{SubmitOutcome, WaitlistClient, WaitlistForm};
//!
//! let client = WaitlistClient::new("https://example.com")?;
//! let mut form = WaitlistForm::new();
//! form.full_name = "Jane Doe".into();
//! form.email = "jane@example.com".into();
//! form.set_token(token_from_widget);
//!
//! match form.submit(&client).await? {
//!     SubmitOutcome::Confirmed(_) => show_confirmation(),
//!     SubmitOutcome::Notification(message) => toast(&message),
//! }
//! ```

mod client;
mod error;
mod form;

pub use client::WaitlistClient;
pub use error::ClientError;
pub use form::{
    FieldErrors, FormError, INVALID_EMAIL_MESSAGE, NAME_TOO_SHORT_MESSAGE, SubmitOutcome,
    WaitlistForm,
};

// Re-export shared types for convenience
pub use waitlist_types::{JoinWaitlistRequest, WaitlistEntry, WidgetConfig};
