//! Android color resources read through JNI.
//!
//! ## Usage
//!
//! Call [`dynamic_light_color_scheme`] or [`dynamic_dark_color_scheme`] from
//! any thread of a process whose Android context is registered with
//! `ndk-context` (true for `NativeActivity` and `GameActivity` apps).

use std::{borrow::Cow, cell::RefCell};

use jni::{
    JNIEnv,
    objects::{JObject, JValue},
};
use platform_jni::{AndroidJniError, call_int, call_object, map_jni_error, sdk_int, with_context};
use tracing::warn;

use crate::{
    catalog::SystemCatalog,
    color::Argb,
    config::ResolverConfig,
    resolver::resolve_with,
    resources::{ColorResources, ResourceKey, ResourceUnavailable},
    scheme::{DynamicColorScheme, Variant},
};

/// Where and how Android color resources are looked up.
#[derive(Clone, Debug)]
pub struct AndroidOptions {
    /// Package that owns the color resources.
    pub package: Cow<'static, str>,
    /// Resource names.
    pub catalog: SystemCatalog,
    /// Resolver thresholds.
    pub resolver: ResolverConfig,
}

impl Default for AndroidOptions {
    fn default() -> Self {
        Self {
            package: Cow::Borrowed("android"),
            catalog: SystemCatalog::default(),
            resolver: ResolverConfig::default(),
        }
    }
}

/// Color resources of the application context, valid for one attached JNI
/// session.
pub struct JniColorResources<'a, 'local> {
    env: RefCell<&'a mut JNIEnv<'local>>,
    resources: JObject<'local>,
    theme: JObject<'local>,
    def_type: JObject<'local>,
    package: JObject<'local>,
}

impl<'a, 'local> JniColorResources<'a, 'local> {
    /// Opens the context's `Resources` and `Theme`.
    pub fn open(
        env: &'a mut JNIEnv<'local>,
        context: &JObject<'local>,
        package: &str,
    ) -> Result<Self, AndroidJniError> {
        let resources = call_object(
            env,
            context,
            "getResources",
            "()Landroid/content/res/Resources;",
            &[],
        )?
        .ok_or(AndroidJniError::NullObject("Resources"))?;
        // A null theme resolves colors without theme attributes.
        let theme = call_object(
            env,
            context,
            "getTheme",
            "()Landroid/content/res/Resources$Theme;",
            &[],
        )?
        .unwrap_or_else(JObject::null);
        let def_type = new_string(env, "color")?;
        let package = new_string(env, package)?;
        Ok(Self {
            env: RefCell::new(env),
            resources,
            theme,
            def_type,
            package,
        })
    }

    fn identifier(&self, env: &mut JNIEnv<'local>, name: &str) -> Result<i32, AndroidJniError> {
        let name = new_string(env, name)?;
        let id = call_int(
            env,
            &self.resources,
            "getIdentifier",
            "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)I",
            &[
                JValue::Object(&name),
                JValue::Object(&self.def_type),
                JValue::Object(&self.package),
            ],
        );
        let _ = env.delete_local_ref(name);
        id
    }
}

impl ColorResources for JniColorResources<'_, '_> {
    fn color(&self, key: &ResourceKey) -> Result<Argb, ResourceUnavailable> {
        let mut env = self.env.borrow_mut();
        let env = &mut **env;
        let id = self
            .identifier(env, key.name())
            .map_err(|err| ResourceUnavailable::rejected(key, err.to_string()))?;
        if id == 0 {
            return Err(ResourceUnavailable::not_found(key));
        }
        call_int(
            env,
            &self.resources,
            "getColor",
            "(ILandroid/content/res/Resources$Theme;)I",
            &[JValue::Int(id), JValue::Object(&self.theme)],
        )
        .map(Argb::from)
        .map_err(|err| ResourceUnavailable::rejected(key, err.to_string()))
    }
}

fn new_string<'local>(
    env: &mut JNIEnv<'local>,
    value: &str,
) -> Result<JObject<'local>, AndroidJniError> {
    env.new_string(value)
        .map(JObject::from)
        .map_err(|err| map_jni_error(env, err))
}

/// The running `Build.VERSION.SDK_INT`.
pub fn api_level() -> Result<u32, AndroidJniError> {
    with_context(|env, _| sdk_int(env)).map(|level| level.max(0) as u32)
}

/// Whether the running release supports dynamic color.
pub fn is_dynamic_color_available() -> bool {
    match api_level() {
        Ok(level) => ResolverConfig::default().is_dynamic_color_available(level),
        Err(err) => {
            warn!("Failed to query the API level: {err}");
            false
        }
    }
}

/// Resolves a scheme from the application context's resources.
///
/// `Resources` and `Theme` are not touched on releases without dynamic color.
/// JNI failures are logged and yield an all-absent scheme.
pub fn resolve_scheme(variant: Variant, options: &AndroidOptions) -> DynamicColorScheme {
    let result = with_context(|env, context| {
        let api_level = sdk_int(env)?.max(0) as u32;
        resolve_with(
            api_level,
            variant,
            &options.catalog,
            &options.resolver,
            move || JniColorResources::open(env, context, &options.package),
        )
    });
    match result {
        Ok(scheme) => scheme,
        Err(err) => {
            warn!("Failed to resolve the {variant} dynamic color scheme: {err}");
            DynamicColorScheme::default()
        }
    }
}

/// Resolves the light scheme with default options.
pub fn dynamic_light_color_scheme() -> DynamicColorScheme {
    resolve_scheme(Variant::Light, &AndroidOptions::default())
}

/// Resolves the dark scheme with default options.
pub fn dynamic_dark_color_scheme() -> DynamicColorScheme {
    resolve_scheme(Variant::Dark, &AndroidOptions::default())
}
