use std::fmt;

#[derive(Debug, Clone)]
pub enum WatchMetricsError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    Serialization(String),
}

impl WatchMetricsError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            WatchMetricsError::DatabaseConfig(_) => "E001",
            WatchMetricsError::DatabaseConnection(_) => "E002",
            WatchMetricsError::DatabaseOperation(_) => "E003",
            WatchMetricsError::Validation(_) => "E004",
            WatchMetricsError::Serialization(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            WatchMetricsError::DatabaseConfig(_) => "Database Configuration Error",
            WatchMetricsError::DatabaseConnection(_) => "Database Connection Error",
            WatchMetricsError::DatabaseOperation(_) => "Database Operation Error",
            WatchMetricsError::Validation(_) => "Validation Error",
            WatchMetricsError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            WatchMetricsError::DatabaseConfig(msg) => msg,
            WatchMetricsError::DatabaseConnection(msg) => msg,
            WatchMetricsError::DatabaseOperation(msg) => msg,
            WatchMetricsError::Validation(msg) => msg,
            WatchMetricsError::Serialization(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for WatchMetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for WatchMetricsError {}

// 便捷的构造函数
impl WatchMetricsError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        WatchMetricsError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        WatchMetricsError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        WatchMetricsError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        WatchMetricsError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        WatchMetricsError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for WatchMetricsError {
    fn from(err: sea_orm::DbErr) -> Self {
        WatchMetricsError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for WatchMetricsError {
    fn from(err: serde_json::Error) -> Self {
        WatchMetricsError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WatchMetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(WatchMetricsError::database_config("x").code(), "E001");
        assert_eq!(WatchMetricsError::validation("x").code(), "E004");
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = WatchMetricsError::validation("empty video_id");
        assert_eq!(err.to_string(), "Validation Error: empty video_id");
    }
}
