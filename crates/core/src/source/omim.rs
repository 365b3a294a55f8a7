//! OMIM, MeSH and MedGen: summaries by identifier, passed through unshaped.

use std::fmt::{self, Display};
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use varinsight_eutils::{Database, Error, UnknownDatabase};

use crate::EutilsClient;
use crate::summary::fetch_summary as fetch_envelope;

/// The databases reachable through [`fetch_summary`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SummaryDatabase {
    /// Online Mendelian Inheritance in Man.
    #[default]
    #[serde(alias = "OMIM")]
    Omim,
    /// Medical Subject Headings.
    #[serde(alias = "MeSH", alias = "MESH")]
    Mesh,
    /// Medical genetics concepts.
    #[serde(alias = "MedGen", alias = "MEDGEN")]
    Medgen,
}

impl From<SummaryDatabase> for Database {
    #[inline]
    fn from(db: SummaryDatabase) -> Self {
        match db {
            SummaryDatabase::Omim => Database::Omim,
            SummaryDatabase::Mesh => Database::Mesh,
            SummaryDatabase::Medgen => Database::Medgen,
        }
    }
}

impl Display for SummaryDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&Database::from(*self), f)
    }
}

impl FromStr for SummaryDatabase {
    type Err = UnknownDatabase;

    /// Parses `omim`, `mesh` or `medgen`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Database>()? {
            Database::Omim => Ok(SummaryDatabase::Omim),
            Database::Mesh => Ok(SummaryDatabase::Mesh),
            Database::Medgen => Ok(SummaryDatabase::Medgen),
            Database::Clinvar | Database::Pubmed => {
                Err(UnknownDatabase::from(s))
            }
        }
    }
}

/// Fetches the summary of record `id` in `db` and returns the raw envelope.
pub async fn fetch_summary(
    client: &EutilsClient,
    id: &str,
    db: SummaryDatabase,
) -> Result<Value, Error> {
    fetch_envelope(client, db.into(), id).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use varinsight_test_eutils::TestTransport;

    use super::*;

    #[test]
    fn test_accepts_mixed_case_names() {
        let db: SummaryDatabase = serde_json::from_value(json!("MeSH")).unwrap();
        assert_eq!(db, SummaryDatabase::Mesh);
        let db: SummaryDatabase = serde_json::from_value(json!("medgen")).unwrap();
        assert_eq!(db, SummaryDatabase::Medgen);
        assert!(serde_json::from_value::<SummaryDatabase>(json!("pubmed")).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("MedGen".parse::<SummaryDatabase>(), Ok(SummaryDatabase::Medgen));
        assert_eq!("omim".parse::<SummaryDatabase>(), Ok(SummaryDatabase::Omim));
        assert!("clinvar".parse::<SummaryDatabase>().is_err());
        assert!("gene".parse::<SummaryDatabase>().is_err());
    }

    #[tokio::test]
    async fn test_fetch_summary_routes_database() {
        let record = json!({ "uid": "604403", "title": "GEFS+ type 2" });
        let transport = TestTransport::default();
        transport.add_summary_records(&[("604403", record.clone())]);
        transport.add_summary_records(&[("C0000", json!({ "uid": "C0000" }))]);
        let client = EutilsClient::new(transport.clone());

        let envelope = fetch_summary(&client, "604403", SummaryDatabase::Omim)
            .await
            .unwrap();
        assert_eq!(envelope["result"]["604403"], record);

        fetch_summary(&client, "C0000", SummaryDatabase::Medgen)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].request.param("db"), Some("omim"));
        assert_eq!(calls[1].request.param("db"), Some("medgen"));
        assert_eq!(calls[1].request.param("id"), Some("C0000"));
    }
}
