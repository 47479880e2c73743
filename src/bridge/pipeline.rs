use super::codec::decode_request;
use super::types::HashResponse;
use crate::digest::{digest_reader, open_regular};
use crate::error::BridgeError;
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// Serves one digest request against the local file system.
///
/// The request is decoded first; only a well-formed request causes a file to be opened. Every
/// failure is reported in the returned response rather than propagated.
///
/// # Arguments
///
/// * `input` - The JSON request text, e.g. `{"filePath": "/tmp/a.txt"}`.
///
/// # Returns
///
/// A `HashResponse` carrying either the digest or an error message.
///
/// # Examples
///
/// ```rust
/// use digest_bridge::bridge::{process_request, HashResponse};
///
/// let response = process_request("not json");
/// assert!(matches!(response, HashResponse::Error(_)));
/// ```
pub fn process_request(input: &str) -> HashResponse {
    process_request_with(input, open_regular)
}

/// Serves one digest request, obtaining the byte source from `open`.
///
/// `open` is called at most once, and never when the request fails to decode.
pub fn process_request_with<F, R>(input: &str, open: F) -> HashResponse
where
    F: FnOnce(&Path) -> Result<R, BridgeError>,
    R: Read,
{
    let result = decode_request(input).and_then(|request| {
        let path = request.file_path.as_path();
        debug!("Computing digest for {}", path.display());
        let reader = open(path)?;
        digest_reader(reader).map_err(|e| e.with_path(path))
    });

    if let Err(e) = &result {
        warn!("Digest request failed: {}", e);
    }
    HashResponse::from(result)
}
