//! SeaORM metric store
//!
//! Persists deduplicated watch-time and quiz-score records, one row per
//! (ip_hash, subject) pair, supporting SQLite and PostgreSQL.

mod connection;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::{Result, WatchMetricsError};

pub use connection::{connect_generic, connect_sqlite, run_migrations};

/// 从数据库 URL 推断数据库类型
///
/// MySQL 被显式拒绝：MAX 合并的 upsert 依赖 `excluded` 伪表
/// （SQLite/PostgreSQL 方言），应用层读后写会重新引入竞态。
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(WatchMetricsError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based metric store
#[derive(Clone)]
pub struct MetricStore {
    db: DatabaseConnection,
    backend_name: String,
}

impl MetricStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(WatchMetricsError::database_config(
                "DATABASE_URL 未设置".to_string(),
            ));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, &backend_name).await?
        };

        let store = MetricStore { db, backend_name };

        // 运行迁移
        run_migrations(&store.db).await?;

        warn!("{} MetricStore initialized.", store.backend_name.to_uppercase());
        Ok(store)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接（用于测试等需要直接访问数据库的场景）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_backend_from_url() {
        assert_eq!(infer_backend_from_url("sqlite://metrics.db").unwrap(), "sqlite");
        assert_eq!(infer_backend_from_url("metrics.sqlite").unwrap(), "sqlite");
        assert_eq!(
            infer_backend_from_url("postgres://localhost/metrics").unwrap(),
            "postgres"
        );
        assert!(infer_backend_from_url("mysql://localhost/metrics").is_err());
        assert!(infer_backend_from_url("what-is-this").is_err());
    }
}
