use tracing::{error, info};

use crate::clients::UserClient;
use crate::user_actor::UserError;

/// The composition root of the user registry.
///
/// `UserSystem` is responsible for:
/// - **Lifecycle Management**: starting the User actor and stopping it again
/// - **Ownership**: the registry lives inside the actor task spawned here; everything else
///   only holds a [`UserClient`] handle
///
/// # Example
///
/// ```ignore
/// let system = UserSystem::new(32)?;
///
/// let user = system.user_client.create_user(draft).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Starts a registry pre-populated with the three demo users.
    pub fn new(buffer_size: usize) -> Result<Self, UserError> {
        let (user_actor, user_client) = crate::user_actor::new_seeded(buffer_size)?;
        Ok(Self::start(user_actor, user_client))
    }

    /// Starts a registry with no users; IDs begin at 1.
    pub fn empty(buffer_size: usize) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        Self::start(user_actor, user_client)
    }

    fn start(
        user_actor: crate::framework::ResourceActor<crate::model::User>,
        user_client: UserClient,
    ) -> Self {
        // User has no dependencies (Context = ())
        let handle = tokio::spawn(user_actor.run(()));
        Self {
            user_client,
            handle,
        }
    }

    /// Gracefully shuts down the registry.
    ///
    /// Dropping the last client closes the channel; the actor finishes the requests
    /// already queued and exits its loop. Clones of the client held elsewhere (e.g. by the
    /// HTTP router) must be dropped first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
