//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use lecturehub_core::types::UserId;
use lecturehub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that every
/// operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Returns whether the current user may publish lectures.
    pub fn is_instructor(&self) -> bool {
        self.role.can_create_lectures()
    }
}
