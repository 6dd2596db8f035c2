//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`; when it is unset the registry logs at `info`.
//! The compact format hides the module prefix (`with_target(false)`): actor logs carry an
//! `entity_type` field instead.
//!
//! ```bash
//! # Default
//! cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the actor framework at debug
//! RUST_LOG=info,user_registry::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with seeded store size), shutdown and final size
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions, with the entity id
//! - **HTTP Requests**: one span per request from `TraceLayer`, with method and path
//! - **Errors**: rejected creates and updates with the reason; panics caught at the
//!   HTTP boundary
//!
//! With `RUST_LOG=info` a create followed by a soft delete looks like:
//!
//! ```text
//! INFO Created entity_type="User" id=4 size=4
//! INFO Action ok entity_type="User" id=4
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
