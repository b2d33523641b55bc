//! # Takeover Domain Models
//!
//! * [`catalog::Catalog`]: ordered service-hint to unclaimed-error-text signatures.
//! * [`targets`]: the list of subdomains to check.
//! * [`verdict::Verdict`]: the tri-state outcome of a single check.

pub mod catalog;
pub mod targets;
pub mod verdict;
