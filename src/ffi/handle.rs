use crate::bridge::ENCODE_FAILURE;
use log::error;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// An owned, NUL-terminated string handed to the host across the C boundary.
///
/// The handle has the same layout as a `char*`. Once returned from an exported function the host
/// owns it and must pass it back to `FreeMemory` exactly once; this crate keeps no record of it.
#[repr(transparent)]
#[derive(Debug)]
pub struct BoundaryString(*mut c_char);

impl BoundaryString {
    /// Allocates a boundary copy of a JSON response.
    ///
    /// JSON produced by `serde_json` never contains a raw NUL byte. If one does appear, the
    /// constant encode-failure response is handed out instead.
    pub fn from_json(json: String) -> Self {
        let owned = CString::new(json).unwrap_or_else(|e| {
            error!("Response contains an interior NUL at byte {}", e.nul_position());
            // SAFETY: ENCODE_FAILURE is a literal without NUL bytes.
            unsafe { CString::from_vec_unchecked(ENCODE_FAILURE.as_bytes().to_vec()) }
        });
        BoundaryString(owned.into_raw())
    }

    /// Raw pointer to the NUL-terminated text.
    pub fn as_ptr(&self) -> *const c_char {
        self.0
    }

    /// Whether the handle holds no allocation.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Borrows the contents as a C string.
    ///
    /// # Safety
    ///
    /// The handle must come from [`BoundaryString::from_json`] and must not have been released.
    pub unsafe fn as_c_str(&self) -> &CStr {
        CStr::from_ptr(self.0)
    }

    /// Frees the allocation. A null handle is ignored.
    ///
    /// # Safety
    ///
    /// The handle must come from [`BoundaryString::from_json`] and must not have been released
    /// before. Any copy of the pointer is dangling afterwards.
    pub unsafe fn release(self) {
        if !self.0.is_null() {
            drop(CString::from_raw(self.0));
        }
    }
}
