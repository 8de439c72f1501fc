//! OKX API Request Types and Endpoint Paths
//!
//! Request payloads are serialized with `serde_json` exactly once; the
//! resulting string is both signed and sent. Responses share the generic
//! `ResponseEnvelope` from the domain layer.

use serde::Serialize;

/// Simple Earn flexible savings purchase / redemption.
pub const SAVINGS_PURCHASE_REDEMPT: &str = "/api/v5/finance/savings/purchase-redempt";

/// Funds transfer between sub-accounts.
pub const ASSET_TRANSFER: &str = "/api/v5/asset/transfer";

/// Trading account balance.
pub const ACCOUNT_BALANCE: &str = "/api/v5/account/balance";

/// `side` value for a savings redemption.
pub const SIDE_REDEEM: &str = "redempt";

/// Savings redemption payload.
#[derive(Debug, Clone, Serialize)]
pub struct RedeemRequest<'a> {
  /// Currency to redeem.
  pub ccy: &'a str,
  /// Quantity as a decimal string.
  pub amt: &'a str,
  /// Always `"redempt"` for redemption.
  pub side: &'a str,
}

impl<'a> RedeemRequest<'a> {
  pub fn new(ccy: &'a str, amt: &'a str) -> Self {
    Self {
      ccy,
      amt,
      side: SIDE_REDEEM,
    }
  }
}

/// Append `params` to `path` as a query string, in the given order.
///
/// The result is what gets signed and requested, so it must be built
/// exactly once per request.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
  if params.is_empty() {
    return path.to_string();
  }
  let query = params
    .iter()
    .map(|(k, v)| format!("{k}={v}"))
    .collect::<Vec<_>>()
    .join("&");
  format!("{path}?{query}")
}
