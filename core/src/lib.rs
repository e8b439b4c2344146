//! Tenure Core Types
//!
//! This crate provides the foundational types used throughout Tenure:
//! - Entity references (Urn)
//! - The ownership aspect and its owner records
//! - Aspect versions and versioned values
//! - Audit stamps and change proposals
//! - Common error types

mod aspect;
mod audit;
mod error;
mod ownership;
mod proposal;
mod urn;

pub use aspect::*;
pub use audit::*;
pub use error::*;
pub use ownership::*;
pub use proposal::*;
pub use urn::*;
