use super::types::{HashRequest, HashResponse};
use crate::error::BridgeError;
use log::error;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Returned when a response cannot be serialized. Serializing two string variants does not fail
/// in practice, so this only exists to keep the boundary free of panics.
pub const ENCODE_FAILURE: &str = r#"{"error":"failed to encode response"}"#;

/// Decodes a JSON request of the form `{"filePath": "<path>"}`.
///
/// # Arguments
///
/// * `input` - The request text received from the host.
///
/// # Returns
///
/// * `Ok(HashRequest)` - The decoded request.
/// * `Err(BridgeError::Decode)` - The text is not a JSON object, or `filePath` is missing or not
///   a string.
pub fn decode_request(input: &str) -> Result<HashRequest, BridgeError> {
    // Derived struct decoding also takes the sequence form; only objects are requests.
    let object: Map<String, Value> = serde_json::from_str(input)?;
    let request = HashRequest::deserialize(Value::Object(object))?;
    Ok(request)
}

/// Serializes a response to its JSON wire form.
pub fn encode_response(response: &HashResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to encode response {:?}: {}", response, e);
        ENCODE_FAILURE.to_string()
    })
}
