//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、用户数据存取等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::user::{NewUser, UserEntity};
pub use repositories::{memory::InMemoryUserRepository, traits::UserRepositoryTrait, user::UserRepository};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
