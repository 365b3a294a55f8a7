use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use varinsight_eutils::Error;

/// How the fake service answers one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// A successful response with this JSON body.
    #[serde(rename = "json")]
    Json(Value),
    /// A non-success status with this body.
    #[serde(rename = "status")]
    Status { status: u16, body: String },
    /// The request never reached the service.
    #[serde(rename = "network_failure")]
    NetworkFailure(String),
}

impl PresetReply {
    /// A search envelope listing `ids`.
    pub fn search_ids<S: AsRef<str>>(ids: &[S]) -> Self {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        PresetReply::Json(json!({
            "header": { "type": "esearch", "version": "0.3" },
            "esearchresult": {
                "count": ids.len().to_string(),
                "retmax": ids.len().to_string(),
                "retstart": "0",
                "idlist": ids,
            }
        }))
    }

    /// A summary envelope with the given records, keyed and listed in the
    /// order given.
    pub fn summary_records<S: AsRef<str>>(records: &[(S, Value)]) -> Self {
        let mut result = serde_json::Map::new();
        let uids: Vec<&str> = records.iter().map(|(id, _)| id.as_ref()).collect();
        result.insert("uids".to_owned(), json!(uids));
        for (id, record) in records {
            result.insert(id.as_ref().to_owned(), record.clone());
        }
        PresetReply::Json(json!({
            "header": { "type": "esummary", "version": "0.3" },
            "result": result,
        }))
    }

    pub(crate) fn into_result(self) -> Result<Value, Error> {
        match self {
            PresetReply::Json(value) => Ok(value),
            PresetReply::Status { status, body } => {
                Err(Error::remote(status, body))
            }
            PresetReply::NetworkFailure(reason) => {
                Err(Error::network().with_reason(reason))
            }
        }
    }
}
