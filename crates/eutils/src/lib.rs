//! Protocol types for the NCBI Entrez Programming Utilities (E-utilities).
//!
//! This crate establishes the vocabulary shared by the lookup pipelines and
//! the transports that carry their requests: which logical databases exist,
//! which endpoints are consumed, how a request is described, and how
//! failures are classified.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that transport implementors should adhere to. The actual
//! HTTP plumbing lives in its own crate, so that tests can swap it for a
//! scripted transport without touching the pipelines.

#![deny(missing_docs)]

mod database;
mod error;
mod request;
mod transport;

pub use database::*;
pub use error::*;
pub use request::*;
pub use transport::*;
