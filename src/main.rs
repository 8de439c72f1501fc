//! OKX Savings Sweep — Entry Point
//!
//! Runs the redeem → transfer → sweep sequence once and exits.
//!
//! Wiring sequence:
//! 1. Load optional config.toml (path from SWEEP_CONFIG) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Load credentials, AMOUNT and Telegram settings from env vars
//! 4. Create OkxClient (HTTP + HMAC auth)
//! 5. Create OkxAccount (implements Exchange port)
//! 6. Create notification channel (Telegram or disabled)
//! 7. Run SavingsSweep to completion

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use okx_savings_sweep::adapters::api::{OkxAccount, OkxAuth, OkxClient, OkxClientConfig};
use okx_savings_sweep::adapters::notify::ChannelNotifier;
use okx_savings_sweep::config::{self, EnvSettings};
use okx_savings_sweep::usecases::{SavingsSweep, SweepPlan};

/// Config file used when SWEEP_CONFIG is unset.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config_path =
        std::env::var("SWEEP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.bot.log_level)
                }),
        )
        .json()
        .init();

    // ── 3. Credentials and per-run values from env vars ─────
    let env = EnvSettings::from_env().context("Invalid environment configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        currency = %config.bot.currency,
        amount = %env.amount,
        sweep_currency = %config.bot.sweep_currency,
        telegram = env.telegram.is_some(),
        "Starting OKX savings sweep"
    );

    // ── 4. OKX HTTP client with auth ────────────────────────
    let auth = Arc::new(OkxAuth::new(env.credentials));
    let client = Arc::new(
        OkxClient::new(auth, OkxClientConfig::from(&config.api))
            .context("Failed to create OKX client")?,
    );

    // ── 5. Exchange port ────────────────────────────────────
    let exchange = Arc::new(OkxAccount::new(client));

    // ── 6. Notification channel ─────────────────────────────
    let notifier = Arc::new(
        ChannelNotifier::from_config(env.telegram.as_ref(), &config.notify)
            .context("Failed to create notifier")?,
    );

    // ── 7. Run the sequence ─────────────────────────────────
    let plan = SweepPlan::new(&config.bot, &env.amount);
    let report = SavingsSweep::new(exchange, notifier, plan)
        .run()
        .await
        .context("Savings sweep aborted")?;

    info!(
        swept = report.sweep.is_some(),
        sweep_balance = %report.sweep_balance,
        "Savings sweep finished"
    );
    Ok(())
}
