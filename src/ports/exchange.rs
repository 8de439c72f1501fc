//! Exchange Port - Account Operations Interface
//!
//! The narrow surface the savings sweep needs from the exchange:
//! redeem from savings, move funds between sub-accounts, and read a
//! trading-account balance. Every call returns the raw envelope; the
//! caller decides what, if anything, to read from it.

use async_trait::async_trait;

use crate::domain::{ResponseEnvelope, TransferRequest};

/// Authenticated account operations on the exchange.
///
/// An `Err` means the call itself failed (network, undecodable body).
/// Business failures such as insufficient balance come back as `Ok`
/// with a non-zero `code` in the envelope.
#[async_trait]
pub trait Exchange: Send + Sync + 'static {
  /// Redeem `amt` of `ccy` from flexible savings.
  async fn redeem(&self, ccy: &str, amt: &str) -> anyhow::Result<ResponseEnvelope>;

  /// Transfer funds between sub-accounts.
  async fn transfer(&self, request: &TransferRequest) -> anyhow::Result<ResponseEnvelope>;

  /// Trading-account balance, filtered to `ccy`.
  async fn balance(&self, ccy: &str) -> anyhow::Result<ResponseEnvelope>;
}
