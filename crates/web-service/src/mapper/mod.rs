//! DTO 与数据库模型之间的转换

pub mod user;

pub use user::UserMapper;
