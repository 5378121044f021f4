//! 数据库仓库 trait 定义
//!
//! 这里定义了数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! Repository trait 统一使用以下约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send`：异步方法返回的 `Future` 需要在不同线程间传递
//! - `Sync`：多个并发请求同时访问同一个 Repository 实例
//! - `'static`：作为应用服务长期运行，放在 `Arc` 中跨 handler 共享
//!
//! ### 使用方式 💡
//!
//! 服务层通过泛型持有仓库，这样测试时可以直接替换为 [`InMemoryUserRepository`]：
//!
//! ```rust,ignore
//! let service = UserService::new(UserRepository::new(pool.clone()));
//! let test_service = UserService::new(InMemoryUserRepository::new());
//! ```
//!
//! 查询单条记录统一返回 [`Option`]，由调用方决定"不存在"意味着什么，
//! 仓库层不会把"不存在"当作错误。
//!
//! [`InMemoryUserRepository`]: crate::InMemoryUserRepository

pub mod user;

// 重新导出
pub use user::UserRepositoryTrait;
