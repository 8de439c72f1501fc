//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by
//! infrastructure concern.
//!
//! Adapter categories:
//! - `api`: OKX REST API client, signing and account operations
//! - `notify`: Telegram and disabled notification channels

pub mod api;
pub mod notify;
