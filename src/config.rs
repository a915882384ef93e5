//! Environment-derived configuration and constants.
//!
//! All configuration is read from environment variables exactly once at process
//! start into an immutable `AppConfig`. Nothing here is re-read or mutated for
//! the lifetime of the process; handlers see a fixed view of the world.

use std::path::PathBuf;
use std::time::Duration;

/// Hard fallback color when neither the override file nor DEFAULT_COLOR yields a value
pub const FALLBACK_COLOR: &str = "blue";

/// Blocking delay applied before the listener binds when DELAY_STARTUP is set
pub const STARTUP_DELAY: Duration = Duration::from_secs(60);

/// Default listening port when PORT is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "color_api=debug,tower_http=debug";

/// Cache-Control value applied to every response. Probe outcomes are fixed per
/// process, but orchestrators probe fresh instances through shared proxies, so
/// nothing may be cached.
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Root configuration, assembled from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (PORT, default 3000)
    pub port: u16,
    /// Fallback color when no file override is present (DEFAULT_COLOR)
    pub default_color: Option<String>,
    /// Path of the single-line color override file (COLOR_CONFIG_PATH)
    pub color_config_path: Option<PathBuf>,
    /// Persistence connection string (DB_URL); presence switches the root
    /// route to database-backed color lookup
    pub db_url: Option<String>,
    /// Probe and startup-delay flags, fixed once at startup
    pub flags: HealthFlags,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            default_color: std::env::var("DEFAULT_COLOR").ok(),
            color_config_path: std::env::var("COLOR_CONFIG_PATH").ok().map(PathBuf::from),
            db_url: std::env::var("DB_URL").ok(),
            flags: HealthFlags::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }
}

/// Probe behavior flags, each derived once at startup and never re-evaluated.
///
/// `fail_readiness` is special: when its environment flag is set, a single
/// 50/50 coin flip at startup decides whether the readiness probe fails for
/// this entire process run. The decision is stored here, not re-rolled per
/// request, so one process run has exactly one readiness outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthFlags {
    pub delay_startup: bool,
    pub fail_liveness: bool,
    pub fail_readiness: bool,
}

impl HealthFlags {
    pub fn from_env() -> Self {
        Self::evaluate(
            env_flag("DELAY_STARTUP"),
            env_flag("FAIL_LIVENESS"),
            env_flag("FAIL_READINESS"),
            rand::random::<bool>(),
        )
    }

    /// Combine the raw flags with the startup coin flip.
    fn evaluate(delay_startup: bool, fail_liveness: bool, fail_readiness: bool, coin: bool) -> Self {
        Self {
            delay_startup,
            fail_liveness,
            fail_readiness: fail_readiness && coin,
        }
    }
}

/// A flag is set iff the variable equals exactly "true".
fn env_flag(name: &str) -> bool {
    flag_set(std::env::var(name).ok().as_deref())
}

fn flag_set(value: Option<&str>) -> bool {
    value == Some("true")
}

/// A set but unparseable PORT aborts startup instead of silently defaulting.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log format: text (human-readable, default) or json (structured)
    pub format: LogFormat,
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            format: LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than exactly "json" means text.
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}
