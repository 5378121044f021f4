use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 创建用户请求
///
/// 所有字段都必须提供，`active` 不能为 `null`。
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct UserCreateRequest {
    #[schema(example = "testuser")]
    #[validate(length(min = 1, message = "username must not be empty"))]
    /// 用户名，不能为空
    pub username: String,

    #[schema(example = "test@example.com")]
    #[validate(email(message = "email must be a valid email address"))]
    /// 邮箱地址
    pub email: String,

    #[schema(example = true)]
    #[validate(required(message = "active must not be null"))]
    /// 是否启用
    pub active: Option<bool>,
}

/// 用户信息
///
/// 对外只暴露 `id`、`username`、`email`，`active` 与时间戳不返回。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    /// 用户ID
    pub id: i64,

    #[schema(example = "testuser")]
    /// 用户名
    pub username: String,

    #[schema(example = "test@example.com")]
    /// 邮箱地址
    pub email: String,
}
