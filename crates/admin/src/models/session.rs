//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

use bramble_core::UserId;

/// Session-stored admin identity.
///
/// Only accounts the Shop API flags as admin ever get one of these; the
/// login handler rejects everyone else before the session is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's Shop API user ID.
    pub id: UserId,
    /// Display username.
    pub username: String,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
