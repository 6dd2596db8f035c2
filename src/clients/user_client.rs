use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{User, UserCreate, UserStats, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
///
/// This is the registry API the HTTP handlers talk to. Reads that need a filter
/// (active-only listings, search, stats) fetch the whole store in one request and filter
/// on the caller's side; every mutation is a single request, so it is applied atomically
/// by the actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Returns true once the actor behind this client is gone.
    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(raw)) => match raw.parse() {
                Ok(id) => UserError::NotFound(id),
                Err(_) => UserError::ActorCommunicationError(format!("Item not found: {}", raw)),
            },
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    /// All users in insertion order, optionally restricted to active ones.
    #[instrument(skip(self))]
    pub async fn list(&self, active_only: bool) -> Result<Vec<User>, UserError> {
        let users = self.list_all().await?;
        if !active_only {
            return Ok(users);
        }
        Ok(users.into_iter().filter(|u| u.is_active).collect())
    }

    /// Active users whose name or email contains `term`, ignoring case.
    ///
    /// A missing or blank term returns every active user. Otherwise the term is matched as
    /// given, surrounding spaces included.
    #[instrument(skip(self))]
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<User>, UserError> {
        self.list_matching(true, term).await
    }

    /// Like [`search`](Self::search), optionally including inactive users.
    #[instrument(skip(self))]
    pub async fn list_matching(
        &self,
        active_only: bool,
        term: Option<&str>,
    ) -> Result<Vec<User>, UserError> {
        let users = self.list(active_only).await?;
        match term {
            Some(term) if !term.trim().is_empty() => {
                Ok(users.into_iter().filter(|u| u.matches(term)).collect())
            }
            _ => Ok(users),
        }
    }

    /// The user with this id, provided it is active.
    #[instrument(skip(self))]
    pub async fn get_active(&self, id: u64) -> Result<User, UserError> {
        match self.get(id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(UserError::NotFound(id)),
        }
    }

    /// First user (active or not) holding `email`, ignoring case, other than `exclude_id`.
    #[instrument(skip(self))]
    pub async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<u64>,
    ) -> Result<Option<User>, UserError> {
        let users = self.list_all().await?;
        Ok(users
            .into_iter()
            .find(|u| Some(u.id) != exclude_id && u.has_email(email)))
    }

    /// Validates and inserts a new user, returning the stored record.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!(?params, "create_user called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Partial update of an active user. PUT and PATCH both land here.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Soft delete: marks an active user inactive.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Deactivate)
            .await
            .map_err(Self::map_error)
    }

    /// Marks any existing user active again.
    #[instrument(skip(self))]
    pub async fn activate(&self, id: u64) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, UserAction::Activate)
            .await
            .map_err(Self::map_error)
    }

    /// Aggregate figures over every stored user.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<UserStats, UserError> {
        let users = self.list_all().await?;
        Ok(UserStats::from_users(&users))
    }
}
