//! Lookup pipelines, one per data source.
//!
//! Each pipeline is a short composition of the search, summary and shaping
//! steps. They differ on purpose: ClinVar output is always shaped, while
//! PubMed and the OMIM family pass the raw envelope through.
//!
//! None of the pipelines retries or recovers; the first failing step ends
//! the call and its error is returned unchanged.

pub mod clinvar;
pub mod omim;
pub mod pubmed;
