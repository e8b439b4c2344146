//! Tenure Proposal
//!
//! Turn prepared ownership aspects into change proposals and submit them.
//!
//! Responsibilities:
//! - Encode each prepared aspect as an UPSERT proposal
//! - Guard proposals with the revision they were merged against
//! - Submit all proposals of a request as one batch
//! - Classify submission failures

mod error;
mod ingest;

pub use error::{IngestError, IngestResult};
pub use ingest::{IngestOptions, IngestReceipt, ProposalIngestor};
