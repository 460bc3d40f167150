//! FFI-safe type definitions
//!
//! Everything here crosses the C ABI, so layouts are `#[repr(C)]`.

/// Result codes for C-ABI operations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestcppResult {
    /// Operation completed successfully
    Success = 0,
    /// Internal error, including a caught panic or a bridge failure
    InternalError = -9,
    /// The produced text could not be represented as a C string
    InvalidString = -11,
    /// Null pointer provided
    NullPointer = -12,
}

impl TestcppResult {
    /// Whether this code signals success
    pub fn is_success(self) -> bool {
        self == TestcppResult::Success
    }
}
