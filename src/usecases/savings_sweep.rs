//! Savings Sweep Use Case - Redeem, Transfer, Sweep Back
//!
//! Runs the fixed sequence against the `Exchange` port, reporting each
//! step through the `Notifier` port:
//!
//! 1. Redeem `amount` of `currency` from flexible savings
//! 2. Wait `settle_delay` for the redemption to land in funding
//! 3. Transfer `amount` of `currency` funding → trading
//! 4. Read the trading balance of `sweep_currency`
//! 5. If it is above zero, transfer all of it trading → funding
//!
//! Envelopes are never interpreted for success: a rejected redemption
//! still proceeds to the transfer, and the operator reads the raw
//! responses. A transport error from the exchange stops the run; nothing
//! already submitted is undone.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::config::BotConfig;
use crate::domain::{ResponseEnvelope, TransferRequest, is_positive, parse_amount};
use crate::ports::{Exchange, Notifier};

/// Parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
  /// Currency redeemed and moved to trading.
  pub currency: String,
  /// Decimal quantity, passed to the exchange verbatim.
  pub amount: String,
  /// Currency swept back to funding when present in trading.
  pub sweep_currency: String,
  /// Pause between redemption and transfer.
  pub settle_delay: Duration,
}

impl SweepPlan {
  pub fn new(bot: &BotConfig, amount: &str) -> Self {
    Self {
      currency: bot.currency.clone(),
      amount: amount.to_string(),
      sweep_currency: bot.sweep_currency.clone(),
      settle_delay: bot.settle_delay(),
    }
  }
}

/// Raw exchange responses collected during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
  pub redeem: ResponseEnvelope,
  pub transfer: ResponseEnvelope,
  /// Trading-account `cashBal` of the sweep currency, `"0"` if absent.
  pub sweep_balance: String,
  /// Present only when a sweep transfer was submitted.
  pub sweep: Option<ResponseEnvelope>,
}

/// Orchestrates the redeem → transfer → sweep sequence.
pub struct SavingsSweep<E: Exchange, N: Notifier> {
  exchange: Arc<E>,
  notifier: Arc<N>,
  plan: SweepPlan,
}

impl<E: Exchange, N: Notifier> SavingsSweep<E, N> {
  pub fn new(exchange: Arc<E>, notifier: Arc<N>, plan: SweepPlan) -> Self {
    Self {
      exchange,
      notifier,
      plan,
    }
  }

  /// Execute the full sequence once.
  #[instrument(skip(self), fields(ccy = %self.plan.currency, amt = %self.plan.amount))]
  pub async fn run(&self) -> Result<SweepReport> {
    let SweepPlan {
      currency,
      amount,
      sweep_currency,
      settle_delay,
    } = &self.plan;

    // 1. Redeem from savings
    let redeem = self
      .exchange
      .redeem(currency, amount)
      .await
      .context("Redeem step failed")?;
    info!(response = %redeem, "Savings redemption submitted");
    self
      .notifier
      .notify(&format!("Redeemed {amount} {currency} from savings:\n{redeem}"))
      .await;

    // 2. Let the redemption settle
    tokio::time::sleep(*settle_delay).await;

    // 3. Funding → trading
    let transfer = self
      .exchange
      .transfer(&TransferRequest::to_trading(currency, amount))
      .await
      .context("Transfer to trading step failed")?;
    info!(response = %transfer, "Transfer to trading submitted");
    self
      .notifier
      .notify(&format!(
        "Transferred {amount} {currency} from funding to trading:\n{transfer}"
      ))
      .await;

    // 4. Residual balance of the sweep currency
    let balance = self
      .exchange
      .balance(sweep_currency)
      .await
      .context("Balance query step failed")?;
    let sweep_balance = balance.cash_balance(sweep_currency);
    info!(ccy = %sweep_currency, balance = %sweep_balance, "Trading balance read");
    self
      .notifier
      .notify(&format!("{sweep_currency} trading balance:\n{sweep_balance}"))
      .await;

    // 5. Sweep it back if there is anything
    let sweep = self.sweep(sweep_currency, &sweep_balance).await?;

    Ok(SweepReport {
      redeem,
      transfer,
      sweep_balance,
      sweep,
    })
  }

  /// Transfer `balance` of `ccy` trading → funding when it is above zero.
  async fn sweep(&self, ccy: &str, balance: &str) -> Result<Option<ResponseEnvelope>> {
    if parse_amount(balance).is_none() {
      warn!(ccy, balance, "Unparseable balance, treating as zero");
    }

    if !is_positive(balance) {
      info!(ccy, "Nothing to sweep");
      self
        .notifier
        .notify(&format!("{ccy} trading balance is {balance}, no transfer needed."))
        .await;
      return Ok(None);
    }

    let response = self
      .exchange
      .transfer(&TransferRequest::to_funding(ccy, balance))
      .await
      .context("Sweep to funding step failed")?;
    info!(response = %response, "Sweep to funding submitted");
    self
      .notifier
      .notify(&format!(
        "Transferred {balance} {ccy} from trading to funding:\n{response}"
      ))
      .await;

    Ok(Some(response))
  }
}
