use color_eyre::Result;
use database::{InMemoryUserRepository, UserRepository};
use shared_lib::{AppConfig, StorageBackend};
use tokio::sync::watch;
use tracing::{info, warn};
use web_service::services::UserService;
use web_service::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    let state = match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = database::initialize_database(&config).await?;
            AppState::new(UserService::new(UserRepository::new(pool)))
        }
        StorageBackend::Memory => {
            warn!("⚠️ 使用内存存储，服务重启后数据会丢失");
            AppState::new(UserService::new(InMemoryUserRepository::new()))
        }
    };

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("📴 收到 Ctrl-C，准备退出");
        }
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(state, &config.bind_addr, shutdown_rx).await?;

    info!("👋 服务已退出");

    Ok(())
}
