//! Notification Adapters
//!
//! Implementations of the `Notifier` port. `ChannelNotifier` picks one
//! at startup from configuration so the use-case layer stays generic.

pub mod telegram;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::config::{NotifyConfig, TelegramConfig};
use crate::ports::Notifier;

pub use telegram::TelegramNotifier;

/// Notifier used when messaging is switched off. Holds no HTTP client
/// and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, _message: &str) {
        debug!("Notifications disabled, message dropped");
    }
}

/// Notification channel selected from configuration.
pub enum ChannelNotifier {
    Telegram(TelegramNotifier),
    Disabled(DisabledNotifier),
}

impl ChannelNotifier {
    /// Telegram when configured, otherwise the no-op channel.
    pub fn from_config(telegram: Option<&TelegramConfig>, notify: &NotifyConfig) -> Result<Self> {
        Ok(match telegram {
            Some(tg) => Self::Telegram(TelegramNotifier::new(
                tg,
                Duration::from_secs(notify.timeout_seconds),
            )?),
            None => Self::Disabled(DisabledNotifier),
        })
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Telegram(_))
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify(&self, message: &str) {
        match self {
            Self::Telegram(tg) => tg.notify(message).await,
            Self::Disabled(off) => off.notify(message).await,
        }
    }
}
