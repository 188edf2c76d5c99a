//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{CreateUser, UpdateUser, User, UserStats};
use crate::errors::AppResult;
use crate::types::{Created, PageParams};

/// Create user routes
///
/// Both `/users` and `/users/` address the collection.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/stats", get(user_stats))
        .route("/users/by-nickname/:nickname", get(get_user_by_nickname))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(PageParams),
    responses(
        (status = 200, description = "Users in id order", body = Vec<User>),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid paging parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(page): ValidatedQuery<PageParams>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users(page).await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Get user by nickname
#[utoipa::path(
    get,
    path = "/users/by-nickname/{nickname}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("nickname" = String, Path, description = "Exact nickname")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_nickname(
    State(state): State<AppState>,
    Path(nickname): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_by_nickname(&nickname).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Nickname or external uid already taken"),
        (status = 422, description = "Missing or invalid fields")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<User>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(user))
}

/// Update coins and/or rating
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid or unknown fields")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete user permanently
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.delete_user(id).await?;
    Ok(Json(user))
}

/// Aggregate user counters
#[utoipa::path(
    get,
    path = "/users/stats",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Total, online and unique user counts", body = UserStats),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn user_stats(State(state): State<AppState>) -> AppResult<Json<UserStats>> {
    let stats = state.user_service.user_stats().await?;
    Ok(Json(stats))
}
