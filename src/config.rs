use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub limits: LimitSettings,
    #[serde(default)]
    pub news: NewsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Upstream data sources
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_uex_base_url")]
    pub uex_base_url: String,
    #[serde(default = "default_news_base_url")]
    pub news_base_url: String,
    #[serde(default = "default_missions_url")]
    pub missions_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            uex_base_url: default_uex_base_url(),
            news_base_url: default_news_base_url(),
            missions_url: default_missions_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_uex_base_url() -> String { "https://api.uexcorp.space/2.0".to_string() }
fn default_news_base_url() -> String {
    "https://raw.githubusercontent.com/selco13/hcn-news-data/main".to_string()
}
fn default_missions_url() -> String {
    "https://raw.githubusercontent.com/selco13/hcn-news-data/main/bounty/list.json".to_string()
}
fn default_user_agent() -> String { "HCN-Radio/1.0".to_string() }
fn default_timeout_secs() -> u64 { 15 }

/// Request and result list limits
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_market_limit")]
    pub market_default_limit: u32,
    #[serde(default = "default_market_max_limit")]
    pub market_max_limit: u32,
    #[serde(default = "default_market_max_items")]
    pub market_max_items: usize,
    #[serde(default = "default_trade_limit")]
    pub trade_default_limit: u32,
    #[serde(default = "default_trade_max_items")]
    pub trade_max_items: usize,
    #[serde(default = "default_missions_max_items")]
    pub missions_max_items: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            market_default_limit: default_market_limit(),
            market_max_limit: default_market_max_limit(),
            market_max_items: default_market_max_items(),
            trade_default_limit: default_trade_limit(),
            trade_max_items: default_trade_max_items(),
            missions_max_items: default_missions_max_items(),
        }
    }
}

fn default_market_limit() -> u32 { 30 }
fn default_market_max_limit() -> u32 { 1000 }
fn default_market_max_items() -> usize { 12 }
fn default_trade_limit() -> u32 { 20 }
fn default_trade_max_items() -> usize { 10 }
fn default_missions_max_items() -> usize { 10 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NewsSettings {
    /// How many days before the requested date to try when it is missing
    #[serde(default = "default_fallback_days")]
    pub fallback_days: u32,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            fallback_days: default_fallback_days(),
        }
    }
}

fn default_fallback_days() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HCN__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HCN__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HCN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HCN")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
