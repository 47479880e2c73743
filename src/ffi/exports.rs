use super::handle::BoundaryString;
use crate::bridge::{encode_response, process_request, HashResponse};
use crate::error::BridgeError;
use crate::logging;
use log::error;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic;

const PANIC_RESPONSE: &str = r#"{"error":"internal error while computing digest"}"#;

/// Computes the SHA-256 digest of the file named in a JSON request.
///
/// Exported as `CalculateSHA256`. The request is `{"filePath": "<path>"}`; the response is
/// `{"hash": "<64 hex chars>"}` or `{"error": "<message>"}`. No failure, including a panic,
/// escapes this function.
///
/// # Safety
///
/// `request` must be null or point to a NUL-terminated string that stays valid for the duration
/// of the call. The returned handle must be passed to `FreeMemory` exactly once.
#[export_name = "CalculateSHA256"]
pub unsafe extern "C" fn compute_digest(request: *const c_char) -> BoundaryString {
    panic::catch_unwind(|| {
        let response = match read_request(request) {
            Ok(input) => process_request(input),
            Err(e) => HashResponse::Error(e.to_string()),
        };
        BoundaryString::from_json(encode_response(&response))
    })
    .unwrap_or_else(|_| {
        error!("Panic while computing digest");
        BoundaryString::from_json(PANIC_RESPONSE.to_string())
    })
}

/// Frees a string returned by [`compute_digest`].
///
/// Exported as `FreeMemory`. A null handle is ignored.
///
/// # Safety
///
/// `handle` must have been returned by `CalculateSHA256` and not released already.
#[export_name = "FreeMemory"]
pub unsafe extern "C" fn release_string(handle: BoundaryString) {
    handle.release();
}

/// Installs the logger, filtered by `RUST_LOG`. Calling it more than once has no effect.
#[export_name = "DigestBridgeInitLogging"]
pub extern "C" fn init_logging() {
    logging::init();
}

/// Borrows the request text behind a C pointer.
unsafe fn read_request<'a>(request: *const c_char) -> Result<&'a str, BridgeError> {
    if request.is_null() {
        return Err(BridgeError::Decode("request pointer is null".to_string()));
    }
    CStr::from_ptr(request)
        .to_str()
        .map_err(|e| BridgeError::Decode(format!("request is not valid UTF-8: {}", e)))
}
