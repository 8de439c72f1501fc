//! OKX Account Adapter — Savings, Transfers and Balances
//!
//! Implements the `Exchange` port using the shared `OkxClient` for
//! authenticated requests. Envelopes are passed through untouched.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::client::OkxClient;
use super::types::{ACCOUNT_BALANCE, ASSET_TRANSFER, RedeemRequest, SAVINGS_PURCHASE_REDEMPT};
use crate::domain::{ResponseEnvelope, TransferRequest};
use crate::ports::Exchange;

/// OKX account operations backed by the shared authenticated client.
pub struct OkxAccount {
    client: Arc<OkxClient>,
}

impl OkxAccount {
    pub fn new(client: Arc<OkxClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Exchange for OkxAccount {
    #[instrument(skip(self))]
    async fn redeem(&self, ccy: &str, amt: &str) -> Result<ResponseEnvelope> {
        let envelope = self
            .client
            .post(SAVINGS_PURCHASE_REDEMPT, &RedeemRequest::new(ccy, amt))
            .await
            .context("Savings redemption request failed")?;
        debug!(code = %envelope.code, "Redemption answered");
        Ok(envelope)
    }

    #[instrument(skip(self, request), fields(ccy = %request.ccy, amt = %request.amt, from = %request.from, to = %request.to))]
    async fn transfer(&self, request: &TransferRequest) -> Result<ResponseEnvelope> {
        let envelope = self
            .client
            .post(ASSET_TRANSFER, request)
            .await
            .context("Funds transfer request failed")?;
        debug!(code = %envelope.code, "Transfer answered");
        Ok(envelope)
    }

    #[instrument(skip(self))]
    async fn balance(&self, ccy: &str) -> Result<ResponseEnvelope> {
        self.client
            .get(ACCOUNT_BALANCE, &[("ccy", ccy)])
            .await
            .context("Balance query failed")
    }
}
