//! Turns a summary envelope into a compact text report.
//!
//! The shaper walks `result.uids` in order, keeps a fixed subset of fields
//! from each record and pretty-prints the outcome as JSON. Large reports are
//! cut to a hard character ceiling, regardless of where the cut lands.

use serde_json::{Map, Value};
use varinsight_eutils::Error;

/// Returned when the envelope lists no identifiers.
pub const NO_RESULTS: &str = "No results found.";

/// The ceiling, in characters, of a shaped report.
pub const MAX_REPORT_CHARS: usize = 3000;

/// Prefixed to a report that hit [`MAX_REPORT_CHARS`].
pub const TRUNCATION_NOTICE: &str =
    "Too many results were found. Only giving first 3000 characters.\n ";

/// Fields kept from a ClinVar document summary.
pub const CLINVAR_FIELDS: &[&str] = &[
    "title",
    "accession",
    "supporting_submissions",
    "clinical_significance",
    "record_status",
    "trait_set",
];

/// Extracts a fixed field subset from summary envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shaper {
    fields: &'static [&'static str],
    max_chars: usize,
}

impl Shaper {
    /// Creates a shaper keeping `fields`, capped at [`MAX_REPORT_CHARS`].
    #[inline]
    pub const fn new(fields: &'static [&'static str]) -> Self {
        Self {
            fields,
            max_chars: MAX_REPORT_CHARS,
        }
    }

    /// The shaper used for ClinVar records.
    #[inline]
    pub const fn clinvar() -> Self {
        Self::new(CLINVAR_FIELDS)
    }

    /// Shapes `envelope` into a report.
    ///
    /// A field missing from a record is left out of that record's entry.
    /// An envelope without `result.uids`, or one listing an identifier it
    /// has no record for, is malformed.
    pub fn shape(&self, envelope: &Value) -> Result<String, Error> {
        let result = &envelope["result"];
        let Some(uids) = result["uids"].as_array() else {
            return Err(Error::malformed_envelope()
                .with_reason("missing `result.uids`"));
        };
        if uids.is_empty() {
            return Ok(NO_RESULTS.to_owned());
        }

        let mut report = Map::with_capacity(uids.len());
        for uid in uids {
            let uid = match uid {
                Value::String(uid) => uid.clone(),
                other => other.to_string(),
            };
            let Some(record) = result[&uid].as_object() else {
                return Err(Error::malformed_envelope()
                    .with_reason(format!("no record for uid {uid}")));
            };

            let subset: Map<String, Value> = self
                .fields
                .iter()
                .filter_map(|&field| {
                    record.get(field).map(|v| (field.to_owned(), v.clone()))
                })
                .collect();
            report.insert(uid, Value::Object(subset));
        }

        let rendered = render(report)?;
        Ok(truncate(rendered, self.max_chars))
    }
}

/// Shapes a ClinVar summary envelope.
///
/// See [`Shaper::shape`].
#[inline]
pub fn shape(envelope: &Value) -> Result<String, Error> {
    Shaper::clinvar().shape(envelope)
}

fn render(report: Map<String, Value>) -> Result<String, Error> {
    serde_json::to_string_pretty(&Value::Object(report))
        .map_err(|err| Error::decode().with_reason(err.to_string()))
}

fn truncate(rendered: String, max_chars: usize) -> String {
    match rendered.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{TRUNCATION_NOTICE}{}", &rendered[..end]),
        None => rendered,
    }
}
