//! PubMed: literature search and summaries, passed through unshaped.

use serde_json::Value;
use varinsight_eutils::{Database, Error, EutilsRequest};

use crate::EutilsClient;
use crate::summary::fetch_summary as fetch_envelope;

/// How many identifiers a literature search returns at most.
pub const SEARCH_RETMAX: u32 = 5;

/// Searches PubMed for `term` and returns the raw search envelope.
pub async fn search(client: &EutilsClient, term: &str) -> Result<Value, Error> {
    let req = EutilsRequest::search(Database::Pubmed, term)
        .with_retmax(SEARCH_RETMAX);
    client.request(req).await
}

/// Fetches the summary of one article and returns the raw envelope.
pub async fn fetch_summary(
    client: &EutilsClient,
    id: &str,
) -> Result<Value, Error> {
    fetch_envelope(client, Database::Pubmed, id).await
}
