//! # User Registry
//!
//! An in-memory user registry served over HTTP. The registry is a single actor task that
//! owns every record; the HTTP handlers reach it through a cloneable client.
//!
//! ## Architecture Notes
//!
//! ### 1. One owner, many callers
//! The store lives inside a [`ResourceActor`](framework::ResourceActor). Requests arrive on a
//! bounded channel and are handled one at a time, so a create's uniqueness check and its
//! insert can never interleave with another request. No locks.
//!
//! ### 2. Type-Safe Error Handling
//! Entity hooks return [`UserError`](user_actor::UserError). The framework carries it boxed
//! and [`UserClient`](clients::UserClient) downcasts it back, so the HTTP layer can match on
//! `NotFound`, `AlreadyExists` and `Validation` and pick 404, 409 or 400.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See the [`lifecycle::tracing`] module.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>` message loop plus the [`ActorEntity`](framework::ActorEntity)
//! trait and test mocks.
//!
//! ### 2. The Data ([`model`])
//! [`User`](model::User), create and update payloads, validation rules and stats.
//!
//! ### 3. The Implementation ([`user_actor`])
//! `ActorEntity` for `User`: validation, email uniqueness, soft delete and reactivation.
//!
//! ### 4. The Interface ([`clients`])
//! [`UserClient`](clients::UserClient), the registry API the handlers call.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`UserSystem`](lifecycle::UserSystem) starts and stops the actor; tracing setup.
//!
//! ### 6. The Front End ([`http`])
//! axum routes under `/api/users`, error rendering and server configuration.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:5000 with the three demo users
//! RUST_LOG=info cargo run
//!
//! # Empty registry on another port
//! cargo run -- --port 8080 --no-seed
//! ```

pub mod clients;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
