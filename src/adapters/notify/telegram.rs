//! Telegram Notifier — Bot API `sendMessage`
//!
//! One POST per message with a bounded timeout. Success is HTTP 200;
//! anything else is logged and dropped. No retries.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::TelegramConfig;
use crate::ports::Notifier;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Delivers messages to a single Telegram chat.
pub struct TelegramNotifier {
    http: Client,
    /// Full `sendMessage` URL. Contains the bot token: never log it.
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build Telegram HTTP client")?;

        Ok(Self {
            http,
            url: send_message_url(&config.api_host, config.bot_token.expose_secret()),
            chat_id: config.chat_id.clone(),
        })
    }
}

/// `https://{host}/bot{token}/sendMessage`, keeping an explicit scheme
/// if `host` already has one.
fn send_message_url(host: &str, token: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{host}/bot{token}/sendMessage")
    } else {
        format!("https://{host}/bot{token}/sendMessage")
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: message,
        };

        match self.http.post(&self.url).json(&payload).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                info!("Telegram notification sent");
            }
            Ok(response) => {
                warn!(status = response.status().as_u16(), "Telegram notification rejected");
            }
            Err(e) => {
                // reqwest errors can embed the URL, which carries the token
                warn!(error = %e.without_url(), "Telegram notification failed");
            }
        }
    }
}
