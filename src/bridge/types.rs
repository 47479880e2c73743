use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::PathBuf;

/// A request to hash one file, as sent by the host application.
///
/// Only `filePath` is recognized; any other fields in the JSON object are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashRequest {
    /// Path of the file whose contents should be hashed.
    pub file_path: PathBuf,
}

/// The outcome of a digest request.
///
/// Serializes as `{"hash":"..."}` on success and `{"error":"..."}` on failure. Being an enum,
/// a response always carries exactly one of the two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashResponse {
    /// Lowercase hexadecimal SHA-256 digest of the file contents.
    Hash(String),
    /// Human-readable description of what went wrong.
    Error(String),
}

impl HashResponse {
    pub fn hash(&self) -> Option<&str> {
        match self {
            HashResponse::Hash(h) => Some(h),
            HashResponse::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            HashResponse::Hash(_) => None,
            HashResponse::Error(e) => Some(e),
        }
    }
}

impl From<Result<String, BridgeError>> for HashResponse {
    fn from(result: Result<String, BridgeError>) -> Self {
        match result {
            Ok(digest) => HashResponse::Hash(digest),
            Err(e) => HashResponse::Error(e.to_string()),
        }
    }
}
