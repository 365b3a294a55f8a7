use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A logical Entrez database that requests are routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// Reports of human variations and their clinical significance.
    Clinvar,
    /// Biomedical literature citations.
    Pubmed,
    /// Online Mendelian Inheritance in Man.
    Omim,
    /// Medical Subject Headings.
    Mesh,
    /// Medical genetics concepts.
    Medgen,
}

impl Database {
    /// Returns the value sent as the `db` query parameter.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Clinvar => "clinvar",
            Database::Pubmed => "pubmed",
            Database::Omim => "omim",
            Database::Mesh => "mesh",
            Database::Medgen => "medgen",
        }
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown database name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownDatabase(String);

impl Display for UnknownDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown database: {}", self.0)
    }
}

impl std::error::Error for UnknownDatabase {}

impl From<&str> for UnknownDatabase {
    #[inline]
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl FromStr for Database {
    type Err = UnknownDatabase;

    /// Parses a database name, ignoring ASCII case (`MeSH`, `OMIM`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let db = match s.to_ascii_lowercase().as_str() {
            "clinvar" => Database::Clinvar,
            "pubmed" => Database::Pubmed,
            "omim" => Database::Omim,
            "mesh" => Database::Mesh,
            "medgen" => Database::Medgen,
            _ => return Err(UnknownDatabase(s.to_owned())),
        };
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("MeSH".parse::<Database>(), Ok(Database::Mesh));
        assert_eq!("OMIM".parse::<Database>(), Ok(Database::Omim));
        assert_eq!("MedGen".parse::<Database>(), Ok(Database::Medgen));
        assert!("dbsnp".parse::<Database>().is_err());
    }

    #[test]
    fn test_serde_uses_query_names() {
        let value = serde_json::to_value(Database::Clinvar).unwrap();
        assert_eq!(value, serde_json::json!("clinvar"));
        assert_eq!(Database::Pubmed.to_string(), "pubmed");
    }
}
