//! Package cache model and scanning.
//!
//! This module provides the version comparator, the nuspec field
//! extraction, and the scan that turns the on-disk cache into summary
//! records.

mod nuspec;
mod scanner;
mod summary;
pub mod version;

pub use nuspec::Nuspec;
pub use scanner::{scan, scan_package};
pub use summary::{IconSource, PackageSummary};
