//! User-specific resource logic and entity implementation.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::{User, UserCreate};

/// Creates a new, empty User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = UserClient::new(generic_client);

    (actor, client)
}

/// Creates a User actor pre-populated with [`seed_users`]. Runtime IDs start at 4.
pub fn new_seeded(buffer_size: usize) -> Result<(ResourceActor<User>, UserClient), UserError> {
    let (actor, client) = new(buffer_size);
    let actor = actor.seed(seed_users())?;
    Ok((actor, client))
}

/// The demo users every registry starts with (IDs 1 to 3).
pub fn seed_users() -> Vec<UserCreate> {
    vec![
        UserCreate::new("Juan Pérez", "juan@email.com", 25),
        UserCreate::new("María García", "maria@email.com", 30),
        UserCreate::new("Carlos López", "carlos@email.com", 28),
    ]
}
