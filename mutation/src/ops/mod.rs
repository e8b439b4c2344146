//! Pure preparation steps.
//!
//! Neither step performs I/O; both are functions of their inputs.

mod merge;
mod normalize;

pub use merge::{merge, merge_counted, MergeStats};
pub use normalize::{normalize_owner, normalize_owners};
