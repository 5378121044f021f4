//! 用户服务
//!
//! 提供用户相关的业务逻辑操作

use crate::mapper::UserMapper;
use crate::models::users::{UserCreateRequest, UserResponse};
use crate::services::traits::UserServiceTrait;
use crate::services::{ServiceResult, UserServiceError};
use database::{UserEntity, UserRepositoryTrait};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UserService<UR: UserRepositoryTrait> {
    user_repository: UR,
    mapper: UserMapper,
}

impl<UR: UserRepositoryTrait> UserService<UR> {
    pub fn new(user_repository: UR) -> Self {
        Self {
            user_repository,
            mapper: UserMapper,
        }
    }

    async fn find_existing(&self, id: i64) -> ServiceResult<UserEntity> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound { id })
    }
}

#[async_trait::async_trait]
impl<UR: UserRepositoryTrait> UserServiceTrait for UserService<UR> {
    async fn create(&self, request: UserCreateRequest) -> ServiceResult<UserResponse> {
        let user = self.mapper.to_entity(request);
        let saved = self.user_repository.save(user).await?;
        Ok(self.mapper.to_response(&saved))
    }

    async fn list_all(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.user_repository.find_all().await?;
        Ok(users.iter().map(|u| self.mapper.to_response(u)).collect())
    }

    async fn get_by_id(&self, id: i64) -> ServiceResult<UserResponse> {
        let user = self.find_existing(id).await?;
        Ok(self.mapper.to_response(&user))
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        let user = self.find_existing(id).await?;
        self.user_repository.delete(&user).await?;
        debug!("🗑️ 用户 {} 已删除", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{DatabaseResult, InMemoryUserRepository, NewUser};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// 记录写操作次数的仓库，用于确认失败路径没有修改数据
    #[derive(Default)]
    struct RecordingRepository {
        inner: InMemoryUserRepository,
        saves: AtomicUsize,
        deletes: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl UserRepositoryTrait for RecordingRepository {
        async fn save(&self, user: NewUser) -> DatabaseResult<UserEntity> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(user).await
        }

        async fn find_all(&self) -> DatabaseResult<Vec<UserEntity>> {
            self.inner.find_all().await
        }

        async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<UserEntity>> {
            self.inner.find_by_id(id).await
        }

        async fn delete(&self, user: &UserEntity) -> DatabaseResult<()> {
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(user).await
        }
    }

    fn request(username: &str, email: &str) -> UserCreateRequest {
        UserCreateRequest {
            username: username.to_string(),
            email: email.to_string(),
            active: Some(true),
        }
    }

    fn service() -> (UserService<Arc<RecordingRepository>>, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        (UserService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_returns_view_with_assigned_id() {
        let (service, repo) = service();

        let created = service.create(request("testuser", "test@example.com")).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.username, "testuser");
        assert_eq!(created.email, "test@example.com");
        assert_eq!(repo.saves.load(Ordering::SeqCst), 1);

        let stored = repo.inner.find_by_id(created.id).await.unwrap().unwrap();
        assert!(stored.active);
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let (service, _) = service();

        let first = service.create(request("a", "a@example.com")).await.unwrap();
        let second = service.create(request("b", "b@example.com")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_all_matches_get_by_id() {
        let (service, _) = service();
        assert!(service.list_all().await.unwrap().is_empty());

        service.create(request("usuario1", "usuario1@example.com")).await.unwrap();
        service.create(request("usuario2", "usuario2@example.com")).await.unwrap();

        let users = service.list_all().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "usuario1");
        assert_eq!(users[1].username, "usuario2");

        for user in &users {
            assert_eq!(&service.get_by_id(user.id).await.unwrap(), user);
        }
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let (service, repo) = service();

        let err = service.get_by_id(999).await.unwrap_err();

        assert!(matches!(err, UserServiceError::NotFound { id: 999 }));
        assert_eq!(err.to_string(), "entity not found with id: 999");
        assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_user_does_not_touch_store() {
        let (service, repo) = service();
        service.create(request("keep", "keep@example.com")).await.unwrap();

        let err = service.delete_by_id(42).await.unwrap_err();

        assert!(matches!(err, UserServiceError::NotFound { id: 42 }));
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);
        assert_eq!(repo.inner.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, repo) = service();
        let created = service.create(request("gone", "gone@example.com")).await.unwrap();

        service.delete_by_id(created.id).await.unwrap();

        assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
        let err = service.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, UserServiceError::NotFound { id } if id == created.id));
        assert!(matches!(
            service.delete_by_id(created.id).await,
            Err(UserServiceError::NotFound { .. })
        ));
    }
}
