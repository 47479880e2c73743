//! Digest Bridge Library
//!
//! This library computes SHA-256 digests of files and returns them as JSON over a C ABI, so a
//! host running in another runtime can load it as a native extension. Each call hashes one file,
//! synchronously, and returns a string the host must release with `FreeMemory`.
//!
//! Rust callers can skip the boundary and use `bridge::process_request` or the `digest` functions
//! directly.

pub mod bridge;
pub mod digest;
mod error;
pub mod ffi;
pub mod logging;

pub use error::BridgeError;
