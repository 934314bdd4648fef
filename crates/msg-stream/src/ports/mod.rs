//! # Ports Layer
//!
//! Trait definitions for the message stream.

pub mod inbound;

pub use inbound::MessageBufferApi;
