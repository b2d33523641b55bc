#![cfg(test)]

mod takeover;
mod utils;
