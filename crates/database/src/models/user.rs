//! 用户数据库模型
//!
//! 对应 `users` 表

use chrono::{DateTime, Utc};

/// 已持久化的用户记录
///
/// `id`、`created_at`、`updated_at` 由存储层在插入时生成，之后不会再变化。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新建用户参数
///
/// 只包含客户端可以设置的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub active: bool,
}
