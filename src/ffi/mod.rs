//! # C Boundary
//!
//! This module exposes the digest bridge to a host written in another language. Requests and
//! responses cross the boundary as NUL-terminated JSON strings. Every string returned to the host
//! is a `BoundaryString` allocated here, and ownership passes to the host on return.
//!
//! ## Exported symbols
//!
//! - `CalculateSHA256(const char* request) -> char*`
//! - `FreeMemory(char* response)`
//! - `DigestBridgeInitLogging()`
//!
//! ## Submodules
//!
//! - **exports**: The `extern "C"` entry points.
//! - **handle**: The owned string handle and its release.

mod exports;
mod handle;

pub use exports::{compute_digest, init_logging, release_string};
pub use handle::BoundaryString;
