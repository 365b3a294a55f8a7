use std::fmt::{self, Debug};
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;
use varinsight_eutils::{Error, EutilsRequest, Transport};

type SendResult = Result<Value, Error>;
type BoxedSendFuture = Pin<Box<dyn Future<Output = SendResult> + Send>>;
type HandlerFn = Arc<dyn Fn(EutilsRequest) -> BoxedSendFuture + Send + Sync>;

/// A wrapper around a transport that provides a type-erased interface for
/// the lookup pipelines.
///
/// Cloning is cheap, and clones share the underlying transport (and with it
/// any connection pool or rate limiter it holds).
#[derive(Clone)]
pub struct EutilsClient {
    handler_fn: HandlerFn,
}

impl EutilsClient {
    /// Creates a client sending requests through `transport`.
    #[inline]
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        // Erase `T` so that tools and pipelines don't carry a generic
        // parameter around.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = transport.send(&req);
            Box::pin(
                async move {
                    trace!("sending {} {:?}", req.endpoint, req.params);
                    let resp_or_err = fut.await;
                    match &resp_or_err {
                        Ok(envelope) => trace!("got an envelope: {envelope}"),
                        Err(err) => error!("got an error: {err}"),
                    }
                    resp_or_err
                }
                .instrument(trace_span!("eutils client req")),
            )
        });
        Self { handler_fn }
    }

    /// Sends a request and returns the decoded envelope.
    ///
    /// Exactly one attempt is made; any failure is returned unchanged.
    #[inline]
    pub async fn request(&self, req: EutilsRequest) -> SendResult {
        (self.handler_fn)(req).await
    }
}

impl Debug for EutilsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EutilsClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use varinsight_eutils::{Database, Endpoint, ErrorKind};
    use varinsight_test_eutils::{PresetReply, TestTransport};

    use super::*;

    #[tokio::test]
    async fn test_request() {
        let transport = TestTransport::default();
        transport.add_reply(
            Endpoint::Summary,
            PresetReply::Json(json!({ "result": { "uids": [] } })),
        );
        let client = EutilsClient::new(transport.clone());

        let envelope = client
            .request(EutilsRequest::summary(Database::Omim, "100100"))
            .await
            .unwrap();
        assert_eq!(envelope, json!({ "result": { "uids": [] } }));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].request.param("id"), Some("100100"));
    }

    #[tokio::test]
    async fn test_error_handling() {
        let transport = TestTransport::default();
        transport.add_reply(
            Endpoint::Search,
            PresetReply::Status {
                status: 503,
                body: "Service Unavailable".to_owned(),
            },
        );
        let client = EutilsClient::new(transport);

        let err = client
            .request(EutilsRequest::search(Database::Pubmed, "CMTR1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.body(), Some("Service Unavailable"));
    }
}
