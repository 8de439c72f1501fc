//! OKX REST API Adapter
//!
//! Implements the HTTP client for the OKX v5 REST API. Handles request
//! signing, the generic response envelope, and the account endpoints
//! the savings sweep uses.
//!
//! Sub-modules:
//! - `auth`: HMAC-SHA256 request signing
//! - `client`: Signed GET/POST over reqwest
//! - `account`: `Exchange` port implementation
//! - `types`: Endpoint paths and request payloads

pub mod account;
pub mod auth;
pub mod client;
pub mod types;

pub use account::OkxAccount;
pub use auth::OkxAuth;
pub use client::{OkxClient, OkxClientConfig};
