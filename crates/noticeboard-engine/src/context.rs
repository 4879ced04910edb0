//! Request context carrying the acting user.

use serde::{Deserialize, Serialize};

use noticeboard_core::types::UserId;

/// Context for the current request.
///
/// Built by the host (from its session/auth layer) and passed into every
/// engine operation, so the engine never reads ambient "current user"
/// state. `is_admin` is a consumed predicate: non-admin contexts see no
/// notices and their dismissals are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
    /// The acting user's id.
    pub user_id: UserId,
    /// Whether the host considers this user an admin.
    pub is_admin: bool,
}

impl UserContext {
    /// Creates a new user context.
    pub fn new(user_id: UserId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// Convenience constructor for an admin context.
    pub fn admin(user_id: UserId) -> Self {
        Self::new(user_id, true)
    }
}
