//! Memory management for strings crossing the C ABI
//!
//! Strings handed out are `CString`s released with `into_raw`; the host
//! gives them back through [`testcpp_string_free`]. The last error lives in
//! a per-thread slot so concurrent callers never see each other's errors.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use crate::error::BridgeError;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    let mut bytes = err.into().into_bytes();
    bytes.retain(|&b| b != 0);
    let message = CString::new(bytes).unwrap_or_default();

    LAST_ERROR.with(|e| *e.borrow_mut() = Some(message));
}

/// Clear the last error message for the current thread
pub fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

/// Copy of the current thread's last error, if any
#[cfg(test)]
pub fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.to_string_lossy().into_owned())
    })
}

/// Allocate a NUL-terminated copy of `s` owned by the caller.
///
/// The pointer must come back through [`testcpp_string_free`].
pub fn allocate_string(s: &str) -> Result<*mut c_char, BridgeError> {
    Ok(CString::new(s)?.into_raw())
}

/// Free a string allocated by this library
///
/// # Safety
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn testcpp_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }

    drop(CString::from_raw(s));
}

/// Get the last error message for the calling thread
///
/// # Safety
/// The returned pointer must NOT be freed. It stays valid until the next
/// testcpp call on the same thread.
#[no_mangle]
pub unsafe extern "C" fn testcpp_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message for the calling thread
#[no_mangle]
pub extern "C" fn testcpp_clear_error() {
    clear_last_error();
}

/// Read a C string this library produced.
///
/// # Safety
/// `s` must be null or a valid NUL-terminated string.
#[cfg(test)]
pub unsafe fn c_str_lossy(s: *const c_char) -> Option<String> {
    if s.is_null() {
        None
    } else {
        Some(std::ffi::CStr::from_ptr(s).to_string_lossy().into_owned())
    }
}
