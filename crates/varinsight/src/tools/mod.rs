//! A set of built-in tools, one per data source.

mod clinvar;
mod omim;
mod pubmed;

pub use clinvar::{ClinVarParameters, ClinVarTool};
pub use omim::{OmimParameters, OmimTool};
pub use pubmed::{PubMedMethod, PubMedParameters, PubMedTool};
