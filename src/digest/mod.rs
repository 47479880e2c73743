//! # Streaming SHA-256 Digests
//!
//! This module computes SHA-256 digests of file contents. Files are streamed through the hasher
//! in fixed-size chunks so memory use stays bounded no matter how large the file is. Digests are
//! rendered as 64-character lowercase hexadecimal strings.
//!
//! ## Usage
//!
//! The main entry point is `digest_file`, which opens a path and streams it. `digest_reader`
//! accepts any `Read` source, and `digest_bytes` hashes a buffer already held in memory.
//!
//! ## Submodules
//!
//! - **stream**: Contains the chunked hashing loop and the file-level wrapper.

mod stream;

pub use stream::{digest_bytes, digest_file, digest_reader, CHUNK_SIZE};
pub(crate) use stream::open_regular;
