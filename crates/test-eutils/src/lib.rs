//! A local fake E-utilities service for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use tokio::time::{Instant, sleep};
use varinsight_eutils::{Endpoint, Error, EutilsRequest, Transport};

pub use preset::*;

/// A request observed by [`TestTransport`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    /// The request as sent by the caller.
    pub request: EutilsRequest,
    /// When the request was sent, on tokio's (possibly paused) clock.
    pub at: Instant,
}

struct ScriptStep {
    endpoint: Endpoint,
    reply: PresetReply,
}

#[derive(Default)]
struct State {
    script: VecDeque<ScriptStep>,
    calls: Vec<RecordedCall>,
    delay: Option<Duration>,
}

/// A local fake service for testing purpose.
///
/// Before sending requests, set up the script: the replies the service gives,
/// in order, each bound to the endpoint it expects. A request to another
/// endpoint, or one past the end of the script, fails with a network error.
/// Every request is recorded, so tests can assert how many calls were made
/// and when.
///
/// Clones share the script and the recorded calls.
#[derive(Clone, Default)]
pub struct TestTransport {
    state: Arc<Mutex<State>>,
}

impl TestTransport {
    #[inline]
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a reply for the next request to `endpoint`.
    pub fn add_reply(&self, endpoint: Endpoint, reply: PresetReply) {
        self.state()
            .script
            .push_back(ScriptStep { endpoint, reply });
    }

    /// Appends a search reply listing `ids`.
    #[inline]
    pub fn add_search_ids<S: AsRef<str>>(&self, ids: &[S]) {
        self.add_reply(Endpoint::Search, PresetReply::search_ids(ids));
    }

    /// Appends a summary reply with the given records.
    #[inline]
    pub fn add_summary_records<S: AsRef<str>>(&self, records: &[(S, Value)]) {
        self.add_reply(Endpoint::Summary, PresetReply::summary_records(records));
    }

    /// Delays every reply by `duration`.
    #[inline]
    pub fn set_delay(&self, duration: Duration) {
        self.state().delay = Some(duration);
    }

    /// Returns every request sent so far.
    #[inline]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Returns the number of scripted replies not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.state().script.len()
    }
}

impl Transport for TestTransport {
    fn send(
        &self,
        req: &EutilsRequest,
    ) -> impl Future<Output = Result<Value, Error>> + Send + 'static {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            request: req.clone(),
            at: Instant::now(),
        });

        let result = match state.script.pop_front() {
            Some(step) if step.endpoint == req.endpoint => {
                step.reply.into_result()
            }
            Some(step) => Err(Error::network().with_reason(format!(
                "expected a request to {}, got {}",
                step.endpoint, req.endpoint
            ))),
            None => Err(Error::network().with_reason("no enough steps")),
        };
        let delay = state.delay;

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use varinsight_eutils::{Database, ErrorKind};

    use super::*;

    #[tokio::test]
    async fn test_send_request() {
        let transport = TestTransport::default();
        transport.add_search_ids(&["123456"]);
        transport.add_summary_records(&[(
            "123456",
            json!({ "title": "Likely pathogenic" }),
        )]);

        let req = EutilsRequest::search(Database::Clinvar, "CMTR1");
        let envelope = transport.send(&req).await.unwrap();
        assert_eq!(envelope["esearchresult"]["idlist"], json!(["123456"]));

        let req = EutilsRequest::summary(Database::Clinvar, "123456");
        let envelope = transport.send(&req).await.unwrap();
        assert_eq!(
            envelope["result"]["123456"]["title"],
            json!("Likely pathogenic")
        );

        assert_eq!(transport.calls().len(), 2);
        assert_eq!(transport.remaining(), 0);
    }

    #[tokio::test]
    async fn test_script_mismatch_and_exhaustion() {
        let transport = TestTransport::default();
        transport.add_search_ids::<&str>(&[]);

        let req = EutilsRequest::summary(Database::Omim, "1");
        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);

        let err = transport.send(&req).await.unwrap_err();
        assert_eq!(err.reason(), "no enough steps");
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay() {
        let transport = TestTransport::default();
        transport.set_delay(Duration::from_millis(250));
        transport.add_search_ids(&["1"]);

        let start = Instant::now();
        let req = EutilsRequest::search(Database::Pubmed, "CMTR1");
        transport.send(&req).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
