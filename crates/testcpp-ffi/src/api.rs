//! C-ABI entry points
//!
//! The same greeting the JVM gets, for hosts that load the library
//! without a JVM (ctypes, Swift, plain C).

use std::os::raw::c_char;

use testcpp_core::greeting;

use crate::error::validate_mut_ptr;
use crate::logging;
use crate::memory::{allocate_string, clear_last_error};
use crate::types::TestcppResult;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Library version as a static NUL-terminated string
///
/// The returned pointer must not be freed.
#[no_mangle]
pub extern "C" fn testcpp_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Write a newly allocated copy of the greeting into `*out`
///
/// # Returns
/// `Success`, or `NullPointer` when `out` is null.
///
/// # Safety
/// - `out` must be null or valid for a single pointer write
/// - The string written to `*out` must be freed with `testcpp_string_free`
#[no_mangle]
pub unsafe extern "C" fn testcpp_string_from_native(out: *mut *mut c_char) -> TestcppResult {
    ffi_boundary!({
        clear_last_error();
        validate_mut_ptr(out, "out")?;

        *out = allocate_string(&greeting())?;
        Ok(TestcppResult::Success)
    })
}

/// Install the library's log sink. Idempotent.
///
/// JVM hosts get this from `JNI_OnLoad`; other hosts may call it once
/// after loading the library.
#[no_mangle]
pub extern "C" fn testcpp_init_logging() {
    logging::init();
}
