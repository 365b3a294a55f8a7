//! The search step: free text in, record identifiers out.

use std::fmt::{self, Display};
use std::slice;

use serde_json::Value;
use varinsight_eutils::{Database, Error, EutilsRequest};

use crate::EutilsClient;

/// Ordered record identifiers returned by a search.
///
/// Identifiers are kept as separate strings; they are only joined with `,`
/// when the list is rendered (e.g. into the `id` parameter of a summary
/// request).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IdList(Vec<String>);

impl IdList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the search matched nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of identifiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the identifiers in search order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the identifiers as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, returning the identifiers.
    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl From<Vec<String>> for IdList {
    #[inline]
    fn from(ids: Vec<String>) -> Self {
        Self(ids)
    }
}

impl FromIterator<String> for IdList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for IdList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IdList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Searches `db` for `term` and returns the matching identifiers.
///
/// No match is not an error: the list is simply empty.
pub async fn search(
    client: &EutilsClient,
    db: Database,
    term: &str,
) -> Result<IdList, Error> {
    let envelope = client.request(EutilsRequest::search(db, term)).await?;
    parse_id_list(&envelope)
}

/// Reads `esearchresult.idlist` out of a search envelope.
pub fn parse_id_list(envelope: &Value) -> Result<IdList, Error> {
    let result = &envelope["esearchresult"];
    let Some(ids) = result["idlist"].as_array() else {
        // A rejected query comes back as 200 with an `ERROR` message.
        let reason = match result["ERROR"].as_str() {
            Some(message) => format!("search failed: {message}"),
            None => "missing `esearchresult.idlist`".to_owned(),
        };
        return Err(Error::malformed_envelope().with_reason(reason));
    };

    ids.iter()
        .map(|id| match id {
            Value::String(id) => Ok(id.clone()),
            Value::Number(id) => Ok(id.to_string()),
            other => Err(Error::malformed_envelope()
                .with_reason(format!("unexpected identifier: {other}"))),
        })
        .collect()
}
