//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，遵循六边形架构原则

pub mod error;
pub mod traits;
pub mod user;

pub use error::{ServiceResult, UserServiceError};
pub use traits::UserServiceTrait;
pub use user::UserService;
