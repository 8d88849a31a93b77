pub mod client;

use std::future::Future;

use crate::error::Result;

/// Anything that can send a payload to a topic. Delivery guarantees belong to
/// the implementation.
pub trait MessagePublisher {
    fn publish(&self, topic: &str, payload: &str) -> impl Future<Output = Result<()>> + Send;
}

/// The I/O side of a publisher: pushes queued publishes out and closes.
pub trait Connection {
    /// Wait until `expected` publishes have been written.
    fn flush(&mut self, expected: usize) -> impl Future<Output = Result<()>>;

    fn disconnect(&mut self) -> impl Future<Output = Result<()>>;
}
