//! Directory classification.
//!
//! This module provides:
//! - A snapshot of one directory's immediate entries
//! - Rules describing a project type by marker files, extensions and subdirectories
//! - An ordered rule table where the first matching rule wins

mod registry;
mod rule;
pub mod rules;
mod snapshot;

pub use registry::RuleTable;
pub use rule::Rule;
pub use rules::default_rules;
pub use snapshot::DirectorySnapshot;
