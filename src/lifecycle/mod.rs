//! Runtime orchestration and lifecycle management.
//!
//! - [`UserSystem`] - starts the User actor, hands out its client and shuts it down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod tracing;
pub mod user_system;

pub use self::tracing::*;
pub use user_system::*;
