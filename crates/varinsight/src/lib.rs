//! Variant lookups over NCBI E-utilities, packaged as ready-made tools.
//!
//! The crate includes a CLI tool for using in the terminal. And you can also
//! use it as a library to hand the tools to your own orchestration layer.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod input;
mod toolbox;
pub mod tools;

pub use input::VariantQuery;
pub use toolbox::{Toolbox, ToolboxBuilder};

/// Re-exports of [`varinsight_core`] crate.
pub mod core {
    pub use varinsight_core::*;
}
