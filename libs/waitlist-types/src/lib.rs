//! Wire types shared by the waitlist API and its client.
//!
//! This crate provides:
//! - The `WaitlistEntry` record returned on a successful sign-up
//! - Request and response bodies for `/api/waitlist`
//! - The user-facing error messages both sides agree on

mod entry;
mod messages;
mod requests;
mod responses;

pub use entry::WaitlistEntry;
pub use messages::{
    CAPTCHA_FAILED_MESSAGE, EMAIL_TAKEN_MESSAGE, INTERNAL_ERROR_MESSAGE, INVALID_EMAIL_MESSAGE,
    REQUIRED_FIELDS_MESSAGE,
};
pub use requests::JoinWaitlistRequest;
pub use responses::{ErrorBody, WidgetConfig};
