//! Environment Settings - Credentials and Per-run Values
//!
//! Recognized variables:
//! - `API_KEY`, `SECRET_KEY`, `PASSPHRASE` (required)
//! - `AMOUNT` (default `"3"`)
//! - `USE_TG` (`1` / `true` / `yes` enables Telegram)
//! - `TG_BOT_TOKEN`, `TG_USER_ID` (required when `USE_TG` is on)
//! - `TG_API_HOST` (default `api.telegram.org`)

use secrecy::SecretString;

use super::ConfigError;
use super::loader::validate_amount;

/// Default quantity redeemed and transferred when `AMOUNT` is unset.
pub const DEFAULT_AMOUNT: &str = "3";

/// Default Telegram Bot API host.
pub const DEFAULT_TG_API_HOST: &str = "api.telegram.org";

/// OKX API credentials. Immutable for the life of the process.
///
/// The secret and passphrase are wrapped so `Debug` redacts them.
#[derive(Debug)]
pub struct Credentials {
  pub api_key: String,
  pub secret_key: SecretString,
  pub passphrase: SecretString,
}

/// Telegram delivery target.
#[derive(Debug)]
pub struct TelegramConfig {
  pub bot_token: SecretString,
  pub chat_id: String,
  /// Host, optionally with an explicit `http://` or `https://` scheme.
  pub api_host: String,
}

/// Everything taken from the process environment.
#[derive(Debug)]
pub struct EnvSettings {
  pub credentials: Credentials,
  /// Decimal quantity to redeem and transfer, kept verbatim.
  pub amount: String,
  /// `None` when notifications are disabled.
  pub telegram: Option<TelegramConfig>,
}

impl EnvSettings {
  /// Read settings from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Read settings through an arbitrary key lookup.
  ///
  /// Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let require = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));

    let credentials = Credentials {
      api_key: require("API_KEY")?,
      secret_key: SecretString::from(require("SECRET_KEY")?),
      passphrase: SecretString::from(require("PASSPHRASE")?),
    };

    let amount = get("AMOUNT")
      .map(|a| a.trim().to_string())
      .unwrap_or_else(|| DEFAULT_AMOUNT.to_string());
    validate_amount(&amount)?;

    let telegram = if get("USE_TG").is_some_and(|v| flag_enabled(&v)) {
      Some(TelegramConfig {
        bot_token: SecretString::from(require("TG_BOT_TOKEN")?),
        chat_id: require("TG_USER_ID")?,
        api_host: get("TG_API_HOST").unwrap_or_else(|| DEFAULT_TG_API_HOST.to_string()),
      })
    } else {
      None
    };

    Ok(Self {
      credentials,
      amount,
      telegram,
    })
  }
}

fn flag_enabled(value: &str) -> bool {
  matches!(
    value.trim().to_ascii_lowercase().as_str(),
    "1" | "true" | "yes"
  )
}
