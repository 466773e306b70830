//! JNI helpers shared by the Android color and window adapters.
//!
//! ## Usage
//!
//! Attach to the process JavaVM and call framework APIs on the application
//! context without writing the attach/exception plumbing in every adapter.
#![deny(missing_docs, clippy::unwrap_used)]

#[cfg(target_os = "android")]
pub mod attach;

#[cfg(target_os = "android")]
pub use attach::{
    AndroidJniError, call_int, call_object, map_jni_error, sdk_int, with_context,
};
