//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `Exchange`: Signed OKX account operations
//! - `Notifier`: Best-effort progress messages

pub mod exchange;
pub mod notifier;

pub use exchange::Exchange;
pub use notifier::Notifier;
