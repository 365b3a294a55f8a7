use serde_json::Value;

use crate::error::Error;
use crate::request::EutilsRequest;

/// A type that carries [`EutilsRequest`]s to the service and brings back
/// the decoded JSON envelope.
///
/// Once the transport is created, it should behave like a stateless object.
/// It may hold a connection pool or a rate limiter internally, but callers
/// should not rely on it. A transport performs exactly one attempt per
/// request; retrying is up to the caller.
pub trait Transport: Send + Sync {
    /// Sends a request and decodes the response body.
    ///
    /// The returned future must be fully independent of `self`.
    fn send(
        &self,
        req: &EutilsRequest,
    ) -> impl Future<Output = Result<Value, Error>> + Send + 'static;
}
