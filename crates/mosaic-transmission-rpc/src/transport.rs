//! The transport contract consumed by the executor.
//!
//! A transport delivers one serialized request body and hands back the raw
//! response body. Authentication, framing and deadlines are its business;
//! the executor never retries.

use mosaic_transmission_types::TransportError;

/// Delivers request bodies to the daemon.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Posts `body` and returns the raw response body.
    async fn post(&self, body: String) -> Result<Vec<u8>, TransportError>;
}
