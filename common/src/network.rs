//! # Network Ports
//!
//! Contracts for the two network lookups a takeover check needs. The core
//! depends only on these traits; concrete adapters live in `overwatch-core`.
//!
//! Both ports separate *expected negatives* (no record, no such name, host
//! unreachable) from *unexpected failures*. Only the latter may surface as an
//! `Error` verdict.

pub mod dns;
pub mod http;
