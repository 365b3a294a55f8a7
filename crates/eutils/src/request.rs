use std::fmt::{self, Display};


use crate::Database;

/// An E-utilities endpoint, relative to the service base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `esearch.fcgi`: free-text search returning record identifiers.
    Search,
    /// `esummary.fcgi`: document summaries for record identifiers.
    Summary,
}

impl Endpoint {
    /// Returns the path of this endpoint.
    #[inline]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "esearch.fcgi",
            Endpoint::Summary => "esummary.fcgi",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A request to be sent through a [`Transport`](crate::Transport).
///
/// Parameters keep their insertion order, which is also the order they
/// appear in the query string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EutilsRequest {
    /// The endpoint to call.
    pub endpoint: Endpoint,
    /// The query parameters.
    pub params: Vec<(String, String)>,
}

impl EutilsRequest {
    /// Creates a search request for `term` in `db`.
    pub fn search<S: Into<String>>(db: Database, term: S) -> Self {
        Self {
            endpoint: Endpoint::Search,
            params: vec![
                ("db".to_owned(), db.as_str().to_owned()),
                ("term".to_owned(), term.into()),
                ("retmode".to_owned(), "json".to_owned()),
            ],
        }
    }

    /// Creates a summary request for `ids` in `db`.
    ///
    /// `ids` is either a single identifier or a comma-joined batch.
    pub fn summary<S: Into<String>>(db: Database, ids: S) -> Self {
        Self {
            endpoint: Endpoint::Summary,
            params: vec![
                ("db".to_owned(), db.as_str().to_owned()),
                ("id".to_owned(), ids.into()),
                ("retmode".to_owned(), "json".to_owned()),
            ],
        }
    }

    /// Limits the number of identifiers a search returns.
    #[inline]
    pub fn with_retmax(mut self, retmax: u32) -> Self {
        self.params.push(("retmax".to_owned(), retmax.to_string()));
        self
    }

    /// Returns the value of the first parameter named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
