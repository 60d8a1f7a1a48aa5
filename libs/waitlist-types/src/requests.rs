use serde::{Deserialize, Serialize};

/// Body of `POST /api/waitlist`.
///
/// Every field is optional on the wire so that a missing field reaches the
/// handler's own validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWaitlistRequest {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Bot-verification token produced by the challenge widget
    #[serde(default)]
    pub token: Option<String>,
}
