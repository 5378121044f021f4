//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use crate::models::users::{UserCreateRequest, UserResponse};
use crate::services::ServiceResult;

/// 用户服务 trait 定义
///
/// 作为应用层的端口(Port)，handler 只依赖这个 trait，具体实现由 [`UserService`] 提供。
///
/// [`UserService`]: crate::services::UserService
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync + 'static {
    /// 创建新用户
    ///
    /// # 返回值
    /// 返回包含存储层分配 `id` 的用户信息
    async fn create(&self, request: UserCreateRequest) -> ServiceResult<UserResponse>;

    /// 获取全部用户，没有数据时返回空列表
    async fn list_all(&self) -> ServiceResult<Vec<UserResponse>>;

    /// 根据 ID 获取用户
    ///
    /// 用户不存在时返回 [`UserServiceError::NotFound`]
    ///
    /// [`UserServiceError::NotFound`]: crate::services::UserServiceError::NotFound
    async fn get_by_id(&self, id: i64) -> ServiceResult<UserResponse>;

    /// 根据 ID 删除用户
    ///
    /// 用户不存在时返回 [`UserServiceError::NotFound`]，不会修改任何数据
    ///
    /// [`UserServiceError::NotFound`]: crate::services::UserServiceError::NotFound
    async fn delete_by_id(&self, id: i64) -> ServiceResult<()>;
}
