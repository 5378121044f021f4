use color_eyre::eyre::{eyre, Context};
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

/// 用户数据存储方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL数据库（默认）
    Postgres,
    /// 进程内存储，重启后数据丢失，适合本地调试
    Memory,
}

impl FromStr for StorageBackend {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(eyre!("Unknown storage backend: {other}"))
                .suggestion("STORAGE_BACKEND 只支持 postgres 或 memory"),
        }
    }
}

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 连接池最大连接数，生产环境配置30~40即可
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 连接池启动时预留的连接数
    ///
    /// 可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 用户数据存储方式，环境变量 `STORAGE_BACKEND`
    pub storage_backend: StorageBackend,

    /// 数据库配置，仅当 `storage_backend` 为 [`StorageBackend::Postgres`] 时存在
    pub database: Option<DatabaseConfig>,

    /// Web服务监听地址，环境变量 `BIND_ADDR`
    pub bind_addr: String,

    /// 日志级别，环境变量 `LOG_LEVEL`
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok()).map(Arc::new)
    }

    /// 根据变量查询函数构建配置
    ///
    /// `lookup` 返回 `None` 表示变量未设置。
    pub fn from_vars<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(s) => s.parse()?,
            None => StorageBackend::Postgres,
        };

        let database = match storage_backend {
            StorageBackend::Memory => None,
            StorageBackend::Postgres => {
                // 读取数据库地址信息（仅支持postgresql）
                let db_url = lookup("DATABASE_URL")
                    .ok_or_else(|| eyre!("DATABASE_URL is not set"))
                    .context("Can not load DATABASE_URL in environment")
                    .suggestion("设置 DATABASE_URL 环境变量，或者设置 STORAGE_BACKEND=memory")?;

                Some(DatabaseConfig {
                    postgresql_conn_str: db_url,
                    max_connections: lookup("DB_MAX_CONNECTIONS").map_or(40, |s| s.parse().unwrap_or(40)),
                    min_connections: lookup("DB_MIN_CONNECTIONS").map_or(5, |s| s.parse().unwrap_or(5)),
                })
            }
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(s) => s
                .parse::<Level>()
                .map_err(|e| eyre!("Invalid LOG_LEVEL `{s}`: {e}"))
                .suggestion("LOG_LEVEL 可选值: trace/debug/info/warn/error")?,
            None => Level::DEBUG,
        };

        Ok(AppConfig {
            storage_backend,
            database,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            log_level,
        })
    }
}
