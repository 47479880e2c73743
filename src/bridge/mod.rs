//! # Digest Requests and Responses
//!
//! This module turns a JSON request naming a file into a JSON response carrying either the file's
//! SHA-256 digest or an error message. It is independent of the C boundary, so Rust callers can
//! use it directly and the `ffi` module only has to move strings across.
//!
//! ## Usage
//!
//! The main entry point is `process_request`, which accepts the request text and returns a
//! `HashResponse`. `encode_response` renders a response to its wire form.
//!
//! ## Submodules
//!
//! - **codec**: JSON decoding of requests and encoding of responses.
//! - **pipeline**: Decode, open, stream and respond for a single request.
//! - **types**: Defines `HashRequest` and `HashResponse`.

mod codec;
mod pipeline;
mod types;

pub use codec::{decode_request, encode_response, ENCODE_FAILURE};
pub use pipeline::{process_request, process_request_with};
pub use types::{HashRequest, HashResponse};
