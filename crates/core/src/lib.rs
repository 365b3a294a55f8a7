//! Core logic: the variant lookup pipelines and the tool boundary they are
//! exposed through.
//!
//! A lookup is built from three steps, each usable on its own:
//!
//! - [`search`] turns free text into an ordered [`IdList`].
//! - [`summary::fetch_summary`] retrieves the summary envelope for some ids.
//! - [`shape`] reduces an envelope to a compact, size-capped report.
//!
//! The [`source`] modules compose those steps per data source, and the
//! [`tool`] module is the seam an orchestration layer calls into.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod client;
pub mod search;
pub mod shape;
pub mod source;
pub mod summary;
pub mod tool;

pub use client::EutilsClient;
pub use search::{IdList, search};
pub use shape::{Shaper, shape};

/// Re-exports of [`varinsight_eutils`] crate.
pub mod eutils {
    pub use varinsight_eutils::*;
}
