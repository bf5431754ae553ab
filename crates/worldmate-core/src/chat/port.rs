//! ChatPort trait definition.
//!
//! The outbound half of the host chat bus: the agent hands finished lines
//! back to the world through this seam. The host supplies the real
//! implementation; tests use a recording one.

/// Outbound chat surface of the host world engine.
///
/// Delivery is fire-and-forget: the host owns reliability and the agent
/// has nothing useful to do with a delivery failure mid-turn.
pub trait ChatPort: Send + Sync {
    /// Send a line visible to all participants in the shared channel.
    fn broadcast(&self, text: &str) -> impl std::future::Future<Output = ()> + Send;

    /// Send a line visible only to the triggering participant. Used for the
    /// "thinking" placeholder and for failure notices.
    fn notify_local(&self, text: &str) -> impl std::future::Future<Output = ()> + Send;
}
