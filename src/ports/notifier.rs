//! Notifier Port - Best-effort Operator Messages
//!
//! Progress messages are a side channel: delivery failures are the
//! adapter's problem and never reach the caller.

use async_trait::async_trait;

/// Fire-and-forget message delivery.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
  /// Deliver `message`. Must not panic and must not block the caller
  /// beyond a bounded timeout.
  async fn notify(&self, message: &str);
}
