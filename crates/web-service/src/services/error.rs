use database::DatabaseError;
use thiserror::Error;

/// 用户服务错误
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// 指定 `id` 的用户不存在
    #[error("entity not found with id: {id}")]
    NotFound { id: i64 },

    /// 仓库层错误，直接透传
    #[error(transparent)]
    Repository(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, UserServiceError>;
