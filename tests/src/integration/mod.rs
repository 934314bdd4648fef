//! # Integration Tests
//!
//! Exercise `msg-stream` strictly through its public API.

pub mod properties;
