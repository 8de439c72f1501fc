//! Configuration Module - Environment + optional TOML settings
//!
//! Secrets and per-run values come from environment variables (see
//! `env`). Non-secret knobs such as the REST host or the settle delay
//! live in an optional `config.toml` (see `loader`). Both are resolved
//! once in `main` and passed by value into constructors.

pub mod env;
pub mod loader;

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub use env::{Credentials, EnvSettings, TelegramConfig};

/// Startup configuration failures. Any of these stops the process
/// before the first network call.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("required environment variable {0} is not set")]
  MissingVar(&'static str),

  #[error("AMOUNT must be a positive decimal, got {0:?}")]
  InvalidAmount(String),

  #[error("invalid setting {field}: {reason}")]
  Invalid { field: &'static str, reason: String },
}

/// Settings read from `config.toml`. Every field has a default, so an
/// absent file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Run parameters.
  pub bot: BotConfig,
  /// OKX REST endpoint.
  pub api: ApiConfig,
  /// Notification delivery.
  pub notify: NotifyConfig,
}

/// Run parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
  /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides.
  pub log_level: String,
  /// Currency redeemed from savings and moved to trading.
  pub currency: String,
  /// Currency swept from trading back to funding when present.
  pub sweep_currency: String,
  /// Pause between redemption and transfer (milliseconds).
  pub settle_delay_ms: u64,
}

impl Default for BotConfig {
  fn default() -> Self {
    Self {
      log_level: "info".to_string(),
      currency: "USDT".to_string(),
      sweep_currency: "BTC".to_string(),
      settle_delay_ms: 1_000,
    }
  }
}

impl BotConfig {
  pub fn settle_delay(&self) -> Duration {
    Duration::from_millis(self.settle_delay_ms)
  }
}

/// OKX REST endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
  /// REST base URL.
  pub base_url: String,
  /// Request timeout in seconds. Unset means no client-side timeout.
  pub timeout_seconds: Option<u64>,
  /// Route requests to the OKX demo-trading environment.
  pub simulated: bool,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: "https://www.okx.com".to_string(),
      timeout_seconds: None,
      simulated: false,
    }
  }
}

/// Notification delivery configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
  /// Upper bound on a single delivery attempt (seconds).
  pub timeout_seconds: u64,
}

impl Default for NotifyConfig {
  fn default() -> Self {
    Self { timeout_seconds: 10 }
  }
}
