//! testcpp FFI - the native side of `sh.diqi.testcpp`
//!
//! This crate builds `libtestcpp`, which exposes the greeting from
//! `testcpp-core` over two surfaces:
//!
//! - JNI: `MainActivity.stringFromJNI()` plus `JNI_OnLoad`
//! - C ABI: `testcpp_string_from_native` and friends, with a header
//!   generated into `include/testcpp.h`
//!
//! # Safety
//!
//! C-ABI callers must:
//! - Free every string returned through an out-pointer with
//!   `testcpp_string_free`, exactly once
//! - Never free pointers from `testcpp_version` or `testcpp_get_last_error`
//! - Read the last error on the thread that made the failing call

#![warn(missing_docs)]

#[macro_use]
mod error;
mod api;
mod jni_bridge;
mod logging;
mod memory;
mod types;

pub use api::*;
pub use error::BridgeError;
pub use jni_bridge::{new_greeting, Java_sh_diqi_testcpp_MainActivity_stringFromJNI, JNI_OnLoad};
pub use logging::{DEFAULT_DIRECTIVE, LOG_ENV};
pub use memory::{testcpp_clear_error, testcpp_get_last_error, testcpp_string_free};
pub use types::TestcppResult;
