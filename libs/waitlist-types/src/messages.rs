/// Returned when `fullName` or `email` is missing, or the name is too short.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Full name and email are required";

/// Returned when the bot-verification service rejects the token.
pub const CAPTCHA_FAILED_MESSAGE: &str = "Invalid CAPTCHA verification. Please try again.";

/// Returned when the email is present but not a valid address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Returned when an entry with the same email already exists.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

/// Generic message for anything unexpected. Details stay in the server logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
