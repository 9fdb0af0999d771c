use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
///
/// Every setting has a default so the service runs with zero configuration;
/// the built-in sample donors keep the matcher exercisable even then.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub registry: RegistrySettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
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

/// Connection parameters for the remote donor registry
///
/// `url` and `token` stay unset unless configured; request payloads may
/// override both per call.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_registry_timeout")]
    pub timeout_secs: u64,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout_secs: default_registry_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_k")]
    pub default_k: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_k: default_k(),
        }
    }
}

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

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_registry_timeout() -> u64 {
    5
}
fn default_k() -> usize {
    5
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Sources, later overrides earlier:
    /// 1. Defaults baked into the structs
    /// 2. config/default.toml, then config/local.toml (both optional)
    /// 3. Environment variables prefixed with BLOODLINK__
    ///    (e.g. BLOODLINK__SERVER__PORT -> server.port)
    /// 4. Plain REGISTRY_URL / REGISTRY_TOKEN variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BLOODLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        apply_plain_env_overrides(&mut settings);
        Ok(settings)
    }

    /// Load configuration from a custom path (used by deployment scripts)
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BLOODLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        apply_plain_env_overrides(&mut settings);
        Ok(settings)
    }
}

/// Unprefixed registry variables, for parity with older deployments
fn apply_plain_env_overrides(settings: &mut Settings) {
    if settings.registry.url.is_none() {
        settings.registry.url = std::env::var("REGISTRY_URL").ok();
    }
    if settings.registry.token.is_none() {
        settings.registry.token = std::env::var("REGISTRY_TOKEN").ok();
    }
}
