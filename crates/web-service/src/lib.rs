//! Web服务模块
//!
//! 提供用户管理 HTTP API 接口和文档服务

use color_eyre::Result;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod extract;
pub mod mapper;
pub mod models;
pub mod routes;
pub mod services;

use services::UserServiceTrait;

/// 应用共享状态
///
/// handler 只依赖 [`UserServiceTrait`]，具体使用哪种存储由启动方决定。
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new<US: UserServiceTrait>(user_service: US) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }
}

/// 启动 Web 服务
///
/// `shutdown_rx` 收到变化后停止接收新连接，等待进行中的请求完成后返回。
pub async fn start_web_service(state: AppState, bind_addr: &str, mut shutdown_rx: Receiver<bool>) -> Result<()> {
    let router = routes::create_app_router(state);

    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
