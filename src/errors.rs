use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    Validation(String),
    NotFound(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Internal(String),
}

impl ShopError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShopError::Validation(_) => "E001",
            ShopError::NotFound(_) => "E002",
            ShopError::Config(_) => "E003",
            ShopError::FileOperation(_) => "E004",
            ShopError::Serialization(_) => "E005",
            ShopError::Internal(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShopError::Validation(_) => "Validation Error",
            ShopError::NotFound(_) => "Resource Not Found",
            ShopError::Config(_) => "Configuration Error",
            ShopError::FileOperation(_) => "File Operation Error",
            ShopError::Serialization(_) => "Serialization Error",
            ShopError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShopError::Validation(msg)
            | ShopError::NotFound(msg)
            | ShopError::Config(msg)
            | ShopError::FileOperation(msg)
            | ShopError::Serialization(msg)
            | ShopError::Internal(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches an API handler.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ShopError::Validation(_) => StatusCode::BAD_REQUEST,
            ShopError::NotFound(_) => StatusCode::NOT_FOUND,
            ShopError::Config(_)
            | ShopError::FileOperation(_)
            | ShopError::Serialization(_)
            | ShopError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShopError {}

// 便捷的构造函数
impl ShopError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShopError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShopError::NotFound(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShopError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShopError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShopError::Serialization(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        ShopError::Internal(msg.into())
    }
}

impl From<std::io::Error> for ShopError {
    fn from(err: std::io::Error) -> Self {
        ShopError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShopError {
    fn from(err: config::ConfigError) -> Self {
        ShopError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShopError {
    fn from(err: toml::ser::Error) -> Self {
        ShopError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
