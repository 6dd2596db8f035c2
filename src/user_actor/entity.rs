//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`User`] to be managed by the generic [`crate::framework::ResourceActor`].
//!
//! See the trait implementation on [`User`] for method documentation.

use super::actions::UserAction;
use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for User {
    type Id = u64;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = User;
    type Context = ();
    type Error = UserError;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Validates the draft and stamps the new record as active, created now.
    fn from_create_params(id: u64, params: UserCreate) -> Result<Self, UserError> {
        params.validate().map_err(UserError::Validation)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            age: params.age,
            created_at: Utc::now(),
            is_active: true,
        })
    }

    /// Emails are unique across every stored user, active or not.
    fn check_unique(&self, existing: &Self) -> Result<(), UserError> {
        if existing.has_email(&self.email) {
            return Err(UserError::AlreadyExists(self.email.clone()));
        }
        Ok(())
    }

    /// Handles updates to the User entity.
    ///
    /// Inactive users cannot be updated. Only the fields present in `update` are checked
    /// and written.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if !self.is_active {
            return Err(UserError::NotFound(self.id));
        }
        update.validate().map_err(UserError::Validation)?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<User, UserError> {
        match action {
            UserAction::Deactivate => {
                if !self.is_active {
                    return Err(UserError::NotFound(self.id));
                }
                self.is_active = false;
            }
            UserAction::Activate => {
                self.is_active = true;
            }
        }
        Ok(self.clone())
    }
}
