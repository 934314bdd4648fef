//! Service Layer
//!
//! Application services that wrap the domain buffer with instrumentation.

pub mod buffer_service;

pub use buffer_service::MessageBufferService;
