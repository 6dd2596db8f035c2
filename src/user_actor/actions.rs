//! Custom actions for the User actor.
//!
//! These are the operations on a [`User`](crate::model::User) that are neither a plain update
//! nor a permanent removal: flipping the `is_active` flag. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action) and both
//! return the user as it stands afterwards.

/// Custom actions for User entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// Soft delete. Fails with `NotFound` when the user is already inactive.
    Deactivate,
    /// Reactivation. Succeeds whatever the current state is.
    Activate,
}
