//! Concrete adapters for the network ports defined in `overwatch_common::network`.

pub mod dns;
pub mod http;
