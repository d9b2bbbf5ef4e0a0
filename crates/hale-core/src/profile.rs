//! Profile data model.
//!
//! A profile links a username to member-specific site data. Its existence is
//! what makes an authenticated user a member: sessions without a matching
//! profile are routed back to the landing page.

use serde::{Deserialize, Serialize};

/// Backend record for a member, looked up by owner username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Username of the account this profile belongs to.
    pub owner: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Category subscriptions shown as filters on the home screen.
    #[serde(default)]
    pub categories: Vec<String>,
}
