//! Error handling for the FFI boundary
//!
//! Neither a JVM nor a C host can take a Rust panic or a Rust error value,
//! so everything that can go wrong in a bridge call is funnelled through
//! [`BridgeError`] and then lowered to whatever the caller understands.

use std::any::Any;
use std::panic;

use thiserror::Error;

use crate::memory::set_last_error;
use crate::types::TestcppResult;

/// Failures raised while handing a value across a bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The JNI layer refused the call (pending exception, OOM, bad env)
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    /// The text could not become a NUL-terminated C string
    #[error("string contains an interior NUL byte")]
    Nul(#[from] std::ffi::NulError),

    /// A required pointer argument was null
    #[error("{0} is null")]
    NullPointer(&'static str),

    /// Code inside the boundary panicked
    #[error("Panic occurred: {0}")]
    Panic(String),
}

impl BridgeError {
    /// The C-ABI result code for this error
    pub fn code(&self) -> TestcppResult {
        match self {
            BridgeError::Nul(_) => TestcppResult::InvalidString,
            BridgeError::NullPointer(_) => TestcppResult::NullPointer,
            BridgeError::Jni(_) | BridgeError::Panic(_) => TestcppResult::InternalError,
        }
    }
}

/// Run `f`, turning a panic into [`BridgeError::Panic`].
pub fn catch_panic<F, R>(f: F) -> Result<R, BridgeError>
where
    F: FnOnce() -> Result<R, BridgeError> + panic::UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(result) => result,
        Err(payload) => Err(BridgeError::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Record `err` as the thread's last error and lower it to a result code.
pub fn report(err: BridgeError) -> TestcppResult {
    let code = err.code();
    if let BridgeError::Panic(msg) = &err {
        tracing::error!(%msg, "panic caught at C boundary");
    } else {
        tracing::warn!(error = %err, ?code, "C boundary call failed");
    }
    set_last_error(err.to_string());
    code
}

/// Execute a C-ABI body inside the panic boundary.
///
/// The body is a `Result<TestcppResult, BridgeError>` expression; errors
/// and panics become result codes with the last error set.
#[macro_export]
macro_rules! ffi_boundary {
    ($body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(code) => code,
            Err(err) => $crate::error::report(err),
        }
    }};
}

/// Validate that an out-pointer is not null
pub fn validate_mut_ptr<T>(ptr: *mut T, name: &'static str) -> Result<(), BridgeError> {
    if ptr.is_null() {
        Err(BridgeError::NullPointer(name))
    } else {
        Ok(())
    }
}
