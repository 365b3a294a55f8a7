//! The summary step.

use serde_json::Value;
use varinsight_eutils::{Database, Error, EutilsRequest};

use crate::EutilsClient;

/// Fetches document summaries for `ids` from `db` and returns the raw
/// envelope.
///
/// `ids` is a single identifier or a comma-joined batch; keeping the batch
/// small is the caller's job. Whatever the single response holds is the
/// complete result.
pub async fn fetch_summary(
    client: &EutilsClient,
    db: Database,
    ids: &str,
) -> Result<Value, Error> {
    client.request(EutilsRequest::summary(db, ids)).await
}
