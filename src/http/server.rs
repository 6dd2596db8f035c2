//! # HTTP Server
//!
//! Combines the user routes with the root greeting and health check, and wraps everything
//! in request tracing and a panic boundary.

use std::any::Any;
use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

use super::config::HttpServerConfig;
use super::error::ApiError;
use super::routes::user_routes;
use crate::clients::UserClient;

/// HTTP server for the user registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server that answers with the given registry client
    pub fn new(config: HttpServerConfig, user_client: UserClient) -> Self {
        let router = build_router(user_client);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until `shutdown` resolves.
    ///
    /// The router (and with it every [`UserClient`] clone it holds) is dropped before this
    /// returns, so the registry actor can finish once its owner lets go.
    pub async fn start<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "User registry listening");
        info!("API available at http://{}/api/users", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the full application router.
pub fn build_router(user_client: UserClient) -> Router {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/api/users", user_routes())
        .with_state(user_client);
    with_middleware(app)
}

/// Request tracing outside, panic boundary inside, so a caught panic is still traced as a 500.
///
/// Request spans and their responses are logged at `INFO`, so the default filter shows one
/// line per request.
pub fn with_middleware(router: Router) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "Unhandled error while processing request");
    ApiError::Internal.into_response()
}

async fn root_handler() -> &'static str {
    "Hello World!"
}

async fn health_handler(State(client): State<UserClient>) -> (StatusCode, Json<Value>) {
    if client.is_closed() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    } else {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::UserSystem;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let system = UserSystem::empty(8);
        let server = HttpServer::new(HttpServerConfig::with_port(8080), system.user_client.clone());
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_invalid_address_is_an_error() {
        let system = UserSystem::empty(8);
        let config = HttpServerConfig {
            host: "not an address".to_string(),
            ..HttpServerConfig::default()
        };
        let server = HttpServer::new(config, system.user_client.clone());
        let err = server.start(async {}).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_panic_payload_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_requests_are_logged_at_info() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = with_middleware(Router::new().route("/", get(root_handler)));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("finished processing request"), "{output}");
    }
}
