use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted waitlist sign-up.
///
/// Serialized in camelCase (`fullName`, `createdAt`) to match the JSON the
/// landing page sends and expects back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Identity assigned when the entry is inserted
    pub id: Uuid,

    /// Full name as submitted (trimmed)
    pub full_name: String,

    /// Email address, unique across all entries
    pub email: String,

    /// Insert time as recorded by the database
    pub created_at: NaiveDateTime,
}
