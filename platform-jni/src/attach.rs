//! Attach helpers and typed call shortcuts over the `jni` crate.

use jni::{
    JNIEnv, JavaVM,
    errors::Error as JniError,
    objects::{JObject, JValue},
};
use thiserror::Error;
use tracing::warn;

/// Errors returned by Android JNI helper calls.
#[derive(Debug, Error)]
pub enum AndroidJniError {
    /// A JNI call failed.
    #[error("JNI error: {0}")]
    Jni(#[from] JniError),
    /// The process has no Android context registered.
    #[error("Android context is not initialized")]
    NoContext,
    /// A required Java object was null.
    #[error("Java object {0} was null")]
    NullObject(&'static str),
}

/// Maps a JNI error, clearing a pending Java exception so the thread stays
/// usable for the next call.
pub fn map_jni_error(env: &mut JNIEnv<'_>, err: JniError) -> AndroidJniError {
    if matches!(err, JniError::JavaException) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
    AndroidJniError::Jni(err)
}

/// Attaches the current thread and runs `f` with the application context.
///
/// The context is the one registered through `ndk-context`; under
/// `NativeActivity` and `GameActivity` it is the hosting activity.
pub fn with_context<R, F>(f: F) -> Result<R, AndroidJniError>
where
    F: for<'local> FnOnce(&mut JNIEnv<'local>, &JObject<'local>) -> Result<R, AndroidJniError>,
{
    let android_context = ndk_context::android_context();
    if android_context.vm().is_null() || android_context.context().is_null() {
        return Err(AndroidJniError::NoContext);
    }
    let jvm = unsafe { JavaVM::from_raw(android_context.vm().cast()) }?;
    let mut env = jvm.attach_current_thread()?;
    let context = unsafe { JObject::from_raw(android_context.context().cast()) };
    f(&mut env, &context)
}

/// Calls an object-returning method; a Java `null` becomes `None`.
pub fn call_object<'local>(
    env: &mut JNIEnv<'local>,
    target: &JObject<'_>,
    name: &str,
    signature: &str,
    args: &[JValue<'_, '_>],
) -> Result<Option<JObject<'local>>, AndroidJniError> {
    let value = env
        .call_method(target, name, signature, args)
        .and_then(|value| value.l())
        .map_err(|err| map_jni_error(env, err))?;
    Ok((!value.is_null()).then_some(value))
}

/// Calls an `int`-returning method.
pub fn call_int(
    env: &mut JNIEnv<'_>,
    target: &JObject<'_>,
    name: &str,
    signature: &str,
    args: &[JValue<'_, '_>],
) -> Result<i32, AndroidJniError> {
    env.call_method(target, name, signature, args)
        .and_then(|value| value.i())
        .map_err(|err| map_jni_error(env, err))
}

/// Reads `android.os.Build.VERSION.SDK_INT`.
pub fn sdk_int(env: &mut JNIEnv<'_>) -> Result<i32, AndroidJniError> {
    env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
        .and_then(|value| value.i())
        .map_err(|err| {
            let err = map_jni_error(env, err);
            warn!("Failed to read SDK_INT: {err}");
            err
        })
}
