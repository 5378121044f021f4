//! 用户仓库
//!
//! 负责用户相关的数据库操作

use crate::models::user::{NewUser, UserEntity};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 基于PostgreSQL的用户仓库
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// 创建新的用户仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    /// 创建新用户
    ///
    /// `created_at` 与 `updated_at` 由数据库 `now()` 生成，`id` 由 `BIGSERIAL` 生成。
    async fn save(&self, user: NewUser) -> DatabaseResult<UserEntity> {
        debug!("📝 创建用户: {:#?}", user);

        let entity = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (username, email, active, created_at, updated_at)
            VALUES ($1, $2, $3, now(), now())
            RETURNING id, username, email, active, created_at, updated_at;
            "#,
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.active)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 用户创建成功: {}", entity.id);
        Ok(entity)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<UserEntity>> {
        debug!("🔍 查询全部用户");

        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, username, email, active, created_at, updated_at
            FROM users
            ORDER BY id;
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 共 {} 个用户", users.len());
        Ok(users)
    }

    /// 根据 ID 获取用户
    ///
    /// 使用 `fetch_optional`，记录不存在时返回 `None` 而不是 [`sqlx::Error::RowNotFound`]。
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<UserEntity>> {
        debug!("🔍 根据 ID 获取用户: {}", id);

        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, username, email, active, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn delete(&self, user: &UserEntity) -> DatabaseResult<()> {
        debug!("🗑️ 删除用户: {}", user.id);

        sqlx::query(
            r#"
            DELETE FROM users
            WHERE id = $1;
            "#,
        )
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
