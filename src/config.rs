//! Environment-sourced configuration
//!
//! All configuration is read once at startup. The bearer token for the
//! read-back endpoints is injected here (`METRICS_TOKEN`) and never
//! hard-coded anywhere else.

use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    /// Bearer token for the read endpoints. Empty disables them.
    pub api_token: String,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://watchmetrics.db?mode=rwc".to_string()),
            api_token: env::var("METRICS_TOKEN").unwrap_or_default(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: env::var("LOG_FILE").ok().filter(|f| !f.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // 环境变量未设置时回退到默认值
        let config = Config::from_env();
        assert!(!config.server_host.is_empty());
        assert_ne!(config.server_port, 0);
        assert!(config.database_url.contains("://") || config.database_url.ends_with(".db"));
    }
}
