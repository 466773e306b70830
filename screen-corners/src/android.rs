//! Corner radii read from the activity's root window insets.

use std::cell::RefCell;

use jni::{
    JNIEnv,
    objects::{JObject, JValue},
};
use platform_jni::{AndroidJniError, call_int, call_object, sdk_int, with_context};
use tracing::warn;

use crate::{CornerPosition, CornerSource, ScreenCorners};

/// `RoundedCorner`s of one activity's root window insets, valid for one
/// attached JNI session.
pub struct WindowInsetsCorners<'a, 'local> {
    env: RefCell<&'a mut JNIEnv<'local>>,
    insets: Option<JObject<'local>>,
}

impl<'a, 'local> WindowInsetsCorners<'a, 'local> {
    /// Follows `getWindow().getDecorView().getRootView().getRootWindowInsets()`.
    ///
    /// A detached view has no insets; every corner then reads as absent.
    pub fn open(
        env: &'a mut JNIEnv<'local>,
        activity: &JObject<'local>,
    ) -> Result<Self, AndroidJniError> {
        let window = call_object(env, activity, "getWindow", "()Landroid/view/Window;", &[])?
            .ok_or(AndroidJniError::NullObject("Window"))?;
        let decor = call_object(env, &window, "getDecorView", "()Landroid/view/View;", &[])?
            .ok_or(AndroidJniError::NullObject("DecorView"))?;
        let root = call_object(env, &decor, "getRootView", "()Landroid/view/View;", &[])?
            .ok_or(AndroidJniError::NullObject("RootView"))?;
        let insets = call_object(
            env,
            &root,
            "getRootWindowInsets",
            "()Landroid/view/WindowInsets;",
            &[],
        )?;
        Ok(Self {
            env: RefCell::new(env),
            insets,
        })
    }

    fn read_radius(&self, position: CornerPosition) -> Result<Option<f64>, AndroidJniError> {
        let Some(insets) = &self.insets else {
            return Ok(None);
        };
        let mut env = self.env.borrow_mut();
        let env = &mut **env;
        let Some(corner) = call_object(
            env,
            insets,
            "getRoundedCorner",
            "(I)Landroid/view/RoundedCorner;",
            &[JValue::Int(position.android_position())],
        )?
        else {
            return Ok(None);
        };
        let radius = call_int(env, &corner, "getRadius", "()I", &[]);
        let _ = env.delete_local_ref(corner);
        Ok(Some(f64::from(radius?)))
    }
}

impl CornerSource for WindowInsetsCorners<'_, '_> {
    fn radius(&self, position: CornerPosition) -> Option<f64> {
        self.read_radius(position).unwrap_or_else(|err| {
            warn!("Failed to read the {position:?} screen corner: {err}");
            None
        })
    }
}

/// Reads the corner radii of the activity registered with `ndk-context`.
///
/// JNI failures are logged and yield absent corners.
pub fn screen_corners() -> ScreenCorners {
    let result = with_context(|env, activity| {
        let api_level = sdk_int(env)?.max(0) as u32;
        if !ScreenCorners::is_supported(api_level) {
            return Ok(ScreenCorners::default());
        }
        let source = WindowInsetsCorners::open(env, activity)?;
        Ok(ScreenCorners::resolve(api_level, &source))
    });
    result.unwrap_or_else(|err| {
        warn!("Failed to read screen corners: {err}");
        ScreenCorners::default()
    })
}
