//! 用户相关接口
//!

use crate::extract::ValidatedJson;
use crate::models::err::AppError;
use crate::models::users::{UserCreateRequest, UserResponse};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// 创建用户
///
/// 请求体通过 [`ValidatedJson`] 解析并校验：
///
/// - `username` 不能为空
/// - `email` 必须是合法的邮箱地址
/// - `active` 必须提供且不能为 `null`
///
/// 校验失败直接返回400，不会调用服务层。
#[utoipa::path(post,
    path = "/users",
    tag = "users",
    request_body = UserCreateRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserCreateRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("Creating user {:#?}", request);

    let user = state.user_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// 查询全部用户
#[utoipa::path(get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users in insertion order", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    debug!("Listing users");

    let users = state.user_service.list_all().await?;

    Ok(Json(users))
}

/// 查询指定用户信息
#[utoipa::path(get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(user_id): Path<i64>) -> Result<Json<UserResponse>, AppError> {
    debug!("Getting user id {}", user_id);

    let user = state.user_service.get_by_id(user_id).await?;

    Ok(Json(user))
}

/// 删除指定的用户
///
/// 成功时返回204，没有响应体
#[utoipa::path(delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(user_id): Path<i64>) -> Result<StatusCode, AppError> {
    debug!("Deleting user id {}", user_id);

    state.user_service.delete_by_id(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
