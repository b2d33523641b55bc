//! # Overwatch Core
//!
//! The takeover detection pipeline.
//!
//! * [`classifier`]: per-subdomain decision logic (DNS, signature match, HTTP confirmation).
//! * [`scanner`]: runs the classifier over a list of subdomains.
//! * [`network`]: hickory and reqwest adapters for the ports in `overwatch_common::network`.

pub mod classifier;
pub mod network;
pub mod scanner;
