//! HTTP front end for the user registry.
//!
//! - [`HttpServerConfig`] - bind address and registry settings (flags, env, serde)
//! - [`HttpServer`] / [`build_router`] - axum router with tracing and panic handling
//! - [`ApiError`] - registry errors rendered as JSON error bodies

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, with_middleware, HttpServer};
