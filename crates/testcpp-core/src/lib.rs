//! testcpp core - the greeting handed to managed-code callers
//!
//! This crate knows nothing about any bridge. It only produces the text;
//! `testcpp-ffi` converts it into whatever representation the calling
//! runtime expects.
//!
//! # Example
//!
//! ```
//! use testcpp_core::{greeting, GREETING};
//!
//! assert_eq!(greeting(), GREETING);
//! ```

pub mod greeting;

pub use greeting::{greeting, GREETING};
