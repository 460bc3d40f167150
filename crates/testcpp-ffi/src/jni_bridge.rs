//! JNI entry points
//!
//! `sh.diqi.testcpp.MainActivity` declares
//! `public native String stringFromJNI();` and loads this library with
//! `System.loadLibrary("testcpp")`.

use std::ffi::c_void;
use std::panic::AssertUnwindSafe;
use std::ptr;

use jni::objects::{JObject, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use testcpp_core::greeting;

use crate::error::{catch_panic, BridgeError};
use crate::logging;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Called by the JVM from `System.loadLibrary`.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    tracing::debug!("libtestcpp loaded");
    JNI_VERSION_1_6
}

/// `MainActivity.stringFromJNI()`
///
/// Returns a new local reference to a `java.lang.String` holding the
/// greeting. If the JVM cannot build the string it has already raised an
/// exception (typically `OutOfMemoryError`); null is returned and the
/// exception is left pending for the caller.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn Java_sh_diqi_testcpp_MainActivity_stringFromJNI<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    let result = catch_panic(AssertUnwindSafe(|| new_greeting(&env)));
    match result {
        Ok(s) => s.into_raw(),
        Err(BridgeError::Panic(msg)) => {
            tracing::error!(%msg, "panic in stringFromJNI");
            if env.throw_new(RUNTIME_EXCEPTION, msg).is_err() {
                tracing::error!("could not raise RuntimeException");
            }
            ptr::null_mut()
        }
        Err(err) => {
            tracing::warn!(error = %err, "JVM could not allocate the greeting");
            ptr::null_mut()
        }
    }
}

/// Build the greeting as a JVM string owned by the current native frame.
pub fn new_greeting<'local>(env: &JNIEnv<'local>) -> Result<JString<'local>, BridgeError> {
    Ok(env.new_string(greeting())?)
}
