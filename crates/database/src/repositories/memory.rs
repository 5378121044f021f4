//! 内存用户仓库
//!
//! 数据只保存在进程内，用于测试和不依赖数据库的本地调试。

use crate::models::user::{NewUser, UserEntity};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct UserTable {
    rows: BTreeMap<i64, UserEntity>,
    next_id: i64,
}

/// 基于 [`BTreeMap`] 的用户仓库
///
/// `id` 从 1 开始自增，删除后不会复用，因此按 `id` 遍历即为插入顺序。
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// 当前记录数
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn save(&self, user: NewUser) -> DatabaseResult<UserEntity> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let now = Utc::now();
        let entity = UserEntity {
            id,
            username: user.username,
            email: user.email,
            active: user.active,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, entity.clone());

        debug!("📝 内存仓库创建用户: {}", id);
        Ok(entity)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<UserEntity>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<UserEntity>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, user: &UserEntity) -> DatabaseResult<()> {
        self.table.write().await.rows.remove(&user.id);
        debug!("🗑️ 内存仓库删除用户: {}", user.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_ids_and_timestamps() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(new_user("alice")).await.unwrap();
        let second = repo.save(new_user("bob")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.username, "alice");
        assert_eq!(first.email, "alice@example.com");
        assert!(first.active);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        for name in ["carol", "alice", "bob"] {
            repo.save(new_user(name)).await.unwrap();
        }

        let names: Vec<String> = repo.find_all().await.unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["carol", "alice", "bob"]);
    }

    #[tokio::test]
    async fn test_find_by_id_and_delete() {
        let repo = InMemoryUserRepository::new();
        let user = repo.save(new_user("alice")).await.unwrap();

        assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);

        repo.delete(&user).await.unwrap();
        assert_eq!(repo.find_by_id(user.id).await.unwrap(), None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.save(new_user("alice")).await.unwrap();
        repo.delete(&first).await.unwrap();

        let second = repo.save(new_user("bob")).await.unwrap();
        assert_eq!(second.id, 2);
    }
}
