//! ClinVar: search a variant within a gene, then shape its summaries.

use std::time::Duration;

use tokio::time::sleep;
use tracing::Instrument;
use varinsight_eutils::{Database, Error};

use crate::search::{IdList, search};
use crate::shape::shape;
use crate::summary::fetch_summary;
use crate::EutilsClient;

/// The pause between the search and the summary fetch of one lookup.
pub const PACING_DELAY: Duration = Duration::from_millis(500);

/// Builds the search term for `variant` in the context of `gene`.
#[inline]
pub fn variant_term(variant: &str, gene: &str) -> String {
    format!("{variant} + {gene}")
}

/// Searches ClinVar for `term`.
#[inline]
pub async fn search_variants(
    client: &EutilsClient,
    term: &str,
) -> Result<IdList, Error> {
    search(client, Database::Clinvar, term).await
}

/// Fetches summaries for `ids` (one identifier or a comma-joined batch)
/// and shapes them into a report.
pub async fn fetch_shaped(
    client: &EutilsClient,
    ids: &str,
) -> Result<String, Error> {
    let envelope = fetch_summary(client, Database::Clinvar, ids).await?;
    shape(&envelope)
}

/// Looks up `variant` (e.g. `c.1187G>A`) in `gene` (e.g. `CMTR1`) and
/// returns the shaped report.
///
/// Issues exactly one search and one summary fetch, waiting
/// [`PACING_DELAY`] in between. The fetch runs even when the search found
/// nothing, in which case the report is [`NO_RESULTS`].
///
/// [`NO_RESULTS`]: crate::shape::NO_RESULTS
pub async fn lookup(
    client: &EutilsClient,
    variant: &str,
    gene: &str,
) -> Result<String, Error> {
    let term = variant_term(variant, gene);
    async {
        let ids = search_variants(client, &term).await?;
        debug!("search matched {} records", ids.len());

        sleep(PACING_DELAY).await;

        fetch_shaped(client, &ids.to_string()).await
    }
    .instrument(debug_span!("clinvar lookup", %term))
    .await
}
