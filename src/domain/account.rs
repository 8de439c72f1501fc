//! Sub-account identifiers and transfer requests.
//!
//! OKX partitions a user's holdings into sub-accounts. Funds redeemed
//! from savings land in the funding account and must be moved to the
//! trading account before they can be used for orders.

use serde::{Serialize, Serializer};

/// OKX sub-account, encoded on the wire by its numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Trading (unified) account, id `6`.
    Trading,
    /// Funding account, id `18`.
    Funding,
}

impl AccountType {
    /// Wire id used in the `from` / `to` fields of a transfer.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Trading => "6",
            Self::Funding => "18",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trading => write!(f, "trading"),
            Self::Funding => write!(f, "funding"),
        }
    }
}

impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// Request to move `amt` of `ccy` between two sub-accounts.
///
/// The amount stays a decimal string so the exact value the caller
/// supplied is what gets signed and sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    pub ccy: String,
    pub amt: String,
    pub from: AccountType,
    pub to: AccountType,
}

impl TransferRequest {
    /// Funding → trading, used after a savings redemption.
    pub fn to_trading(ccy: &str, amt: &str) -> Self {
        Self {
            ccy: ccy.to_string(),
            amt: amt.to_string(),
            from: AccountType::Funding,
            to: AccountType::Trading,
        }
    }

    /// Trading → funding, used to sweep a residual balance back.
    pub fn to_funding(ccy: &str, amt: &str) -> Self {
        Self {
            ccy: ccy.to_string(),
            amt: amt.to_string(),
            from: AccountType::Trading,
            to: AccountType::Funding,
        }
    }
}
