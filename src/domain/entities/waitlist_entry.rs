pub use waitlist_types::WaitlistEntry;

use crate::application::validators::is_valid_full_name;

/// A sign-up that passed field validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewEntryError {
    /// Name or email missing, or the name is shorter than two characters
    MissingFields,
}

impl NewWaitlistEntry {
    /// Trims both fields and checks presence and name length. An absent field
    /// and an empty one are treated the same. Email format is not checked here;
    /// it runs after bot verification.
    pub fn parse(full_name: Option<&str>, email: Option<&str>) -> Result<Self, NewEntryError> {
        let full_name = full_name.map(str::trim).unwrap_or_default();
        let email = email.map(str::trim).unwrap_or_default();

        if email.is_empty() || !is_valid_full_name(full_name) {
            return Err(NewEntryError::MissingFields);
        }

        Ok(Self {
            full_name: full_name.to_string(),
            email: email.to_string(),
        })
    }
}
