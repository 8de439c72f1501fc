//! Configuration Loader - File Loading and Validation
//!
//! Handles loading the optional `config.toml`, validating all
//! parameters, and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AppConfig, ConfigError};
use crate::domain::is_positive;

/// Load and validate configuration from a TOML file.
///
/// A missing file is not an error: defaults are used instead.
///
/// # Errors
/// Returns detailed error if:
/// - The file exists but can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let config = if path.exists() {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
      .with_context(|| format!("Failed to parse {}", path.display()))?
  } else {
    AppConfig::default()
  };

  validate_config(&config)?;

  info!(
    file = %path.display(),
    currency = %config.bot.currency,
    sweep_currency = %config.bot.sweep_currency,
    settle_delay_ms = config.bot.settle_delay_ms,
    simulated = config.api.simulated,
    "Configuration loaded"
  );

  Ok(config)
}

/// Validate file-level settings.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
  if config.bot.currency.trim().is_empty() {
    return Err(invalid("bot.currency", "must not be empty"));
  }
  if config.bot.sweep_currency.trim().is_empty() {
    return Err(invalid("bot.sweep_currency", "must not be empty"));
  }
  if config.bot.currency.eq_ignore_ascii_case(&config.bot.sweep_currency) {
    return Err(invalid(
      "bot.sweep_currency",
      "must differ from bot.currency",
    ));
  }
  if config.api.base_url.trim().is_empty() {
    return Err(invalid("api.base_url", "must not be empty"));
  }
  if config.notify.timeout_seconds == 0 {
    return Err(invalid("notify.timeout_seconds", "must be positive"));
  }
  Ok(())
}

/// Validate the per-run amount: a strictly positive decimal.
pub fn validate_amount(raw: &str) -> Result<(), ConfigError> {
  if is_positive(raw) {
    Ok(())
  } else {
    Err(ConfigError::InvalidAmount(raw.to_string()))
  }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
  ConfigError::Invalid {
    field,
    reason: reason.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_file_uses_defaults() {
    let config = load_config("nonexistent.toml").unwrap();
    assert_eq!(config.bot.currency, "USDT");
    assert_eq!(config.bot.sweep_currency, "BTC");
    assert_eq!(config.bot.settle_delay_ms, 1_000);
    assert_eq!(config.api.base_url, "https://www.okx.com");
    assert_eq!(config.api.timeout_seconds, None);
    assert_eq!(config.notify.timeout_seconds, 10);
  }

  #[test]
  fn test_partial_toml_keeps_defaults() {
    let config: AppConfig = toml::from_str(
      r#"
        [bot]
        settle_delay_ms = 2500

        [api]
        simulated = true
      "#,
    )
    .unwrap();
    assert_eq!(config.bot.settle_delay_ms, 2_500);
    assert_eq!(config.bot.currency, "USDT");
    assert!(config.api.simulated);
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_same_currencies_rejected() {
    let mut config = AppConfig::default();
    config.bot.sweep_currency = "usdt".to_string();
    assert!(matches!(
      validate_config(&config),
      Err(ConfigError::Invalid { field: "bot.sweep_currency", .. })
    ));
  }

  #[test]
  fn test_empty_base_url_rejected() {
    let mut config = AppConfig::default();
    config.api.base_url = String::new();
    assert!(validate_config(&config).is_err());
  }

  #[test]
  fn test_amount_validation() {
    assert!(validate_amount("3").is_ok());
    assert!(validate_amount("0.5").is_ok());
    assert!(validate_amount("0").is_err());
    assert!(validate_amount("-1").is_err());
    assert!(validate_amount("three").is_err());
  }
}
