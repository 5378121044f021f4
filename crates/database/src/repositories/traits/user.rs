//! 用户仓库 trait 定义
//!
//! 定义用户数据库操作的抽象接口

use crate::models::user::{NewUser, UserEntity};
use crate::DatabaseResult;

/// 用户仓库trait定义
///
/// 定义了用户相关的数据库操作接口，支持：
/// - 用户创建
/// - 用户列表
/// - 用户查询
/// - 用户删除
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    /// 保存新用户
    ///
    /// # 返回值
    /// 返回存储层分配了 `id` 和时间戳之后的完整记录
    async fn save(&self, user: NewUser) -> DatabaseResult<UserEntity>;

    /// 查询全部用户，按插入顺序（`id` 升序）返回
    async fn find_all(&self) -> DatabaseResult<Vec<UserEntity>>;

    /// 根据 ID 查询用户
    ///
    /// # 返回值
    /// 记录不存在时返回 `Ok(None)`
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<UserEntity>>;

    /// 删除指定用户
    async fn delete(&self, user: &UserEntity) -> DatabaseResult<()>;
}

/// 共享同一个仓库实例，例如测试中需要在服务层之外检查存储内容
#[async_trait::async_trait]
impl<R: UserRepositoryTrait> UserRepositoryTrait for std::sync::Arc<R> {
    async fn save(&self, user: NewUser) -> DatabaseResult<UserEntity> {
        (**self).save(user).await
    }

    async fn find_all(&self) -> DatabaseResult<Vec<UserEntity>> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<UserEntity>> {
        (**self).find_by_id(id).await
    }

    async fn delete(&self, user: &UserEntity) -> DatabaseResult<()> {
        (**self).delete(user).await
    }
}
