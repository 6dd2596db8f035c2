//! User HTTP Routes
//!
//! Endpoints mounted under `/api/users`. Handlers are thin: they parse the request, call
//! [`UserClient`] and let [`ApiError`] pick the status code.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, patch},
    Json, Router,
};
use serde::Deserialize;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::clients::{ActorClient, UserClient};
use crate::model::{User, UserCreate, UserStats, UserUpdate};

// ==================
// Request Types
// ==================

/// Query string accepted by the list and search endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Also return soft-deleted users
    #[serde(default)]
    pub include_inactive: bool,
}

// ==================
// User Routes
// ==================

/// Create user routes. The caller supplies the [`UserClient`] state.
pub fn user_routes() -> Router<UserClient> {
    Router::new()
        .route("/", get(list_users_handler).post(create_user_handler))
        .route("/search", get(search_users_handler))
        .route("/stats", get(user_stats_handler))
        .route(
            "/:id",
            get(get_user_handler)
                .put(update_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/:id/permanent", delete(delete_user_permanent_handler))
        .route("/:id/activate", patch(activate_user_handler))
}

// ==================
// Extractor Helpers
// ==================

fn user_id(path: Result<Path<u64>, PathRejection>) -> ApiResult<u64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn list_query(query: Result<Query<ListQuery>, QueryRejection>) -> ApiResult<ListQuery> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// ==================
// Read Handlers
// ==================

async fn list_users_handler(
    State(client): State<UserClient>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let query = list_query(query)?;
    let users = client
        .list_matching(!query.include_inactive, query.search.as_deref())
        .await?;
    Ok(Json(users))
}

async fn search_users_handler(
    State(client): State<UserClient>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<User>>> {
    let query = list_query(query)?;
    Ok(Json(client.search(query.search.as_deref()).await?))
}

async fn get_user_handler(
    State(client): State<UserClient>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    Ok(Json(client.get_active(id).await?))
}

async fn user_stats_handler(State(client): State<UserClient>) -> ApiResult<Json<UserStats>> {
    Ok(Json(client.stats().await?))
}

// ==================
// Write Handlers
// ==================

async fn create_user_handler(
    State(client): State<UserClient>,
    body: Result<Json<UserCreate>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let draft = json_body(body)?;
    let user = client.create_user(draft).await?;
    debug!(id = user.id, "User created");

    let location = format!("/api/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Serves both PUT and PATCH.
async fn update_user_handler(
    State(client): State<UserClient>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    let update = json_body(body)?;
    Ok(Json(client.update_user(id, update).await?))
}

async fn delete_user_handler(
    State(client): State<UserClient>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = user_id(path)?;
    client.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_user_permanent_handler(
    State(client): State<UserClient>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = user_id(path)?;
    client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn activate_user_handler(
    State(client): State<UserClient>,
    path: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<User>> {
    let id = user_id(path)?;
    Ok(Json(client.activate(id).await?))
}
