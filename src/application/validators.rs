use validator::ValidateEmail;

/// Shortest accepted full name, counted in characters after trimming.
pub const MIN_FULL_NAME_CHARS: usize = 2;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Validates a full name: at least `MIN_FULL_NAME_CHARS` characters once
/// surrounding whitespace is removed.
pub fn is_valid_full_name(full_name: &str) -> bool {
    full_name.trim().chars().count() >= MIN_FULL_NAME_CHARS
}
