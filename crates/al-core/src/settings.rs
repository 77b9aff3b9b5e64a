//! Process settings.
//!
//! [`Settings`] is built once at process start and handed to whoever needs
//! it; nothing in the workspace reads it from a global.  Sources are layered
//! with the `config` crate, later sources overriding earlier ones:
//!
//! 1. `config/default.toml` (optional)
//! 2. `config/{ALMANAC_ENV}.toml` (optional, `ALMANAC_ENV` defaults to
//!    `development`)
//! 3. environment variables prefixed with `ALMANAC_`, nested keys separated
//!    by `__` (e.g. `ALMANAC_HOLIDAYS__TIMEOUT_SECS=10`)

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::errors::{Error, Result};

/// Top-level settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Holiday data source.
    #[serde(default)]
    pub holidays: HolidayApiSettings,
    /// Presentation mode requested by the view layer.
    #[serde(default)]
    pub display: DisplaySettings,
    /// Log filter.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    pub fn load() -> Result<Self> {
        let env = std::env::var("ALMANAC_ENV").unwrap_or_else(|_| "development".into());
        tracing::debug!(environment = %env, "loading settings");
        let rejected = |reason: String| {
            tracing::warn!(environment = %env, error = %reason, "settings rejected");
            Error::Config(reason)
        };

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("ALMANAC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| rejected(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| rejected(e.to_string()))?;
        if let Err(e) = settings.validate() {
            tracing::warn!(environment = %env, error = %e, "settings rejected");
            return Err(e);
        }

        tracing::info!(
            environment = %env,
            base_url = %settings.holidays.base_url,
            timeout_secs = settings.holidays.timeout_secs,
            mode = ?settings.display.mode,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Reject settings the services cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.holidays.base_url.trim().is_empty() {
            return Err(Error::Config("holidays.base_url must not be empty".into()));
        }
        if self.holidays.timeout_secs == 0 {
            return Err(Error::Config(
                "holidays.timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Holiday API endpoint and fetch policy.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HolidayApiSettings {
    /// Scheme and host of the holiday API; `/v1/holidays/{year}` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on a single fetch, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How many years after the current one are preloaded at start-up.
    #[serde(default = "default_preload_years_ahead")]
    pub preload_years_ahead: u16,
}

impl Default for HolidayApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            preload_years_ahead: default_preload_years_ahead(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.jiejiariapi.com".into()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_preload_years_ahead() -> u16 {
    1
}

/// Which panels the view layer shows.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Clock panel plus the 42-cell month grid.
    #[default]
    FullGrid,
    /// Clock panel only; no grid is generated.
    ClockOnly,
}

impl DisplayMode {
    /// Return `true` if this mode shows the month grid.
    pub fn shows_grid(&self) -> bool {
        matches!(self, DisplayMode::FullGrid)
    }
}

/// Presentation settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct DisplaySettings {
    /// Presentation mode.
    #[serde(default)]
    pub mode: DisplayMode,
}

/// Logging settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".into()
}
