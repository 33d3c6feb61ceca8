//! Reconciliation engine for diffing upstream releases against downstream tags

pub mod minor_line;
pub mod reconcile;

pub use minor_line::reduce_minor_lines;
pub use reconcile::{missing_tags, NewTagSet};
