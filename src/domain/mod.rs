//! Domain layer - Core business types.
//!
//! Sub-account ids, transfer requests, the OKX response envelope and
//! decimal-safe amount handling. Nothing here performs I/O.

pub mod account;
pub mod amount;
pub mod envelope;

pub use account::{AccountType, TransferRequest};
pub use amount::{is_positive, parse_amount};
pub use envelope::ResponseEnvelope;
