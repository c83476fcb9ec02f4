use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::seed_customers;
use crate::errors::{Result, ShopError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，分隔符为 `__`，例如 `PETAL__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "PETAL";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - server: 监听地址、端口、worker 数量、对外 base URL
/// - logging: 日志配置
/// - shop: 下单相关配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub shop: ShopConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值。未指定路径时读取 `config.toml`
    /// （可选）；显式指定的文件必须存在。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        use config::{Config, Environment, File};

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ShopError::config("server.port must be greater than 0"));
        }
        if self.server.cpu_count == 0 {
            return Err(ShopError::config("server.cpu_count must be greater than 0"));
        }
        if let Some(base_url) = &self.server.base_url {
            url::Url::parse(base_url).map_err(|e| {
                ShopError::config(format!("Invalid server.base_url '{}': {}", base_url, e))
            })?;
        }
        // 服务启动时使用种子客户数据
        let customer_id = self.shop.default_customer_id;
        if !seed_customers().iter().any(|c| c.id == customer_id) {
            return Err(ShopError::config(format!(
                "shop.default_customer_id {} does not match any customer",
                customer_id
            )));
        }
        match self.logging.format.as_str() {
            "text" | "json" => {}
            other => {
                return Err(ShopError::config(format!(
                    "Invalid logging.format '{}'. Valid: text, json",
                    other
                )));
            }
        }
        Ok(())
    }

    /// Public base URL used for tracking and share links, always ending in `/`.
    ///
    /// Falls back to `http://{host}:{port}/` when `server.base_url` is unset.
    pub fn base_url(&self) -> String {
        let raw = self
            .server
            .base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}/", self.server.host, self.server.port));

        if raw.ends_with('/') {
            raw
        } else {
            format!("{}/", raw)
        }
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
    /// 对外访问地址，例如 `https://shop.example.com/`
    #[serde(default)]
    pub base_url: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 下单配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Customer every batch order is booked for
    #[serde(default = "default_customer_id")]
    pub default_customer_id: u64,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_customer_id() -> u64 {
    102
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
            base_url: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            default_customer_id: default_customer_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_derived_from_listener() {
        let config = StaticConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let mut config = StaticConfig::default();
        config.server.base_url = Some("https://flowers.example.com".to_string());
        assert_eq!(config.base_url(), "https://flowers.example.com/");

        config.server.base_url = Some("https://flowers.example.com/shop/".to_string());
        assert_eq!(config.base_url(), "https://flowers.example.com/shop/");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(ShopError::Config(_))));

        let mut config = StaticConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ShopError::Config(_))));

        let mut config = StaticConfig::default();
        config.server.base_url = Some("not a url".to_string());
        assert!(matches!(config.validate(), Err(ShopError::Config(_))));

        let mut config = StaticConfig::default();
        config.shop.default_customer_id = 999;
        assert!(matches!(config.validate(), Err(ShopError::Config(_))));
    }

    #[test]
    fn test_sample_config_parses_back() {
        let sample = StaticConfig::generate_sample_config().unwrap();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
