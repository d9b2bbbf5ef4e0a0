//! Session data model.
//!
//! A `Session` is the backend's view of the currently authenticated user.
//! It is read-only for this client: roles and the verification flag are
//! managed by the portal.

use serde::{Deserialize, Serialize};

/// Role name that routes a viewer to the admin console.
pub const ADMIN_ROLE: &str = "admin";

/// The currently authenticated user, as reported by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    /// Primary email address on the account.
    pub primary_email: String,
    /// Whether the primary email has been confirmed via a sent link.
    pub email_verified: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Session {
    /// Returns true if the session carries the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Returns true if the session carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}
