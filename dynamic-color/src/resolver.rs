//! Version dispatch and the public resolution entry points.
//!
//! ## Usage
//!
//! Build a [`SchemeResolver`] over the platform's color resources and the
//! running API level, then ask it for the light or dark scheme.

use tracing::debug;

use crate::{
    catalog::{ResourceCatalog, SystemCatalog},
    config::ResolverConfig,
    palette::{TonalPalette, lookup_color},
    resources::ColorResources,
    roles::scheme_from_palette,
    scheme::{ColorRole, DynamicColorScheme, Variant},
};

/// Which generation of color resources the platform exposes. Each tier is
/// resolved by its own strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiTier {
    /// No dynamic color. Resolves to an all-absent scheme.
    Unsupported,
    /// Tonal palette resources only. Roles are projected from a loaded
    /// [`TonalPalette`].
    TonalPalette,
    /// One resource per role. Roles are read directly.
    FullScheme,
}

impl ApiTier {
    /// Classifies an API level.
    pub fn classify(api_level: u32, config: &ResolverConfig) -> Self {
        if api_level >= config.full_scheme_min_api {
            ApiTier::FullScheme
        } else if api_level >= config.tonal_min_api {
            ApiTier::TonalPalette
        } else {
            ApiTier::Unsupported
        }
    }

    /// Resolves a scheme with this tier's strategy.
    pub fn resolve<R, C>(
        self,
        variant: Variant,
        resources: &R,
        catalog: &C,
        config: &ResolverConfig,
    ) -> DynamicColorScheme
    where
        R: ColorResources + ?Sized,
        C: ResourceCatalog + ?Sized,
    {
        match self {
            ApiTier::Unsupported => DynamicColorScheme::default(),
            ApiTier::TonalPalette => {
                let palette = TonalPalette::load(resources, catalog, config.synthesis_base_step);
                scheme_from_palette(&palette, variant)
            }
            ApiTier::FullScheme => direct_scheme(variant, resources, catalog),
        }
    }
}

fn direct_scheme<R, C>(variant: Variant, resources: &R, catalog: &C) -> DynamicColorScheme
where
    R: ColorResources + ?Sized,
    C: ResourceCatalog + ?Sized,
{
    let mut scheme = DynamicColorScheme::default();
    for &role in ColorRole::ALL {
        let color = catalog
            .role_key(role, variant)
            .and_then(|key| lookup_color(resources, &key));
        scheme.set(role, color);
    }
    scheme
}

/// Resolves a scheme, calling `open` for the resources only when the tier
/// reads any. Errors from `open` are returned unchanged.
pub fn resolve_with<R, C, E, F>(
    api_level: u32,
    variant: Variant,
    catalog: &C,
    config: &ResolverConfig,
    open: F,
) -> Result<DynamicColorScheme, E>
where
    R: ColorResources,
    C: ResourceCatalog + ?Sized,
    F: FnOnce() -> Result<R, E>,
{
    let tier = ApiTier::classify(api_level, config);
    let scheme = match tier {
        ApiTier::Unsupported => DynamicColorScheme::default(),
        _ => tier.resolve(variant, &open()?, catalog, config),
    };
    debug!(
        ?tier,
        %variant,
        api_level,
        populated = scheme.populated(),
        "resolved dynamic color scheme"
    );
    Ok(scheme)
}

/// Resolves dynamic color schemes for one platform context.
#[derive(Clone, Debug)]
pub struct SchemeResolver<R, C = SystemCatalog> {
    resources: R,
    catalog: C,
    api_level: u32,
    config: ResolverConfig,
}

impl<R: ColorResources> SchemeResolver<R> {
    /// Creates a resolver over `resources` using the system catalog.
    pub fn new(resources: R, api_level: u32) -> Self {
        Self {
            resources,
            catalog: SystemCatalog::default(),
            api_level,
            config: ResolverConfig::default(),
        }
    }
}

impl<R: ColorResources, C: ResourceCatalog> SchemeResolver<R, C> {
    /// Replaces the resource catalog.
    pub fn with_catalog<C2: ResourceCatalog>(self, catalog: C2) -> SchemeResolver<R, C2> {
        SchemeResolver {
            resources: self.resources,
            catalog,
            api_level: self.api_level,
            config: self.config,
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// API level this resolver classifies.
    pub fn api_level(&self) -> u32 {
        self.api_level
    }

    /// The tier selected for this resolver's API level.
    pub fn tier(&self) -> ApiTier {
        ApiTier::classify(self.api_level, &self.config)
    }

    /// Whether dynamic color is available at all.
    pub fn is_dynamic_color_available(&self) -> bool {
        self.config.is_dynamic_color_available(self.api_level)
    }

    /// Resolves the scheme for `variant`.
    pub fn resolve(&self, variant: Variant) -> DynamicColorScheme {
        let tier = self.tier();
        let scheme = tier.resolve(variant, &self.resources, &self.catalog, &self.config);
        debug!(
            ?tier,
            %variant,
            api_level = self.api_level,
            populated = scheme.populated(),
            "resolved dynamic color scheme"
        );
        scheme
    }

    /// Resolves the light scheme.
    pub fn light(&self) -> DynamicColorScheme {
        self.resolve(Variant::Light)
    }

    /// Resolves the dark scheme.
    pub fn dark(&self) -> DynamicColorScheme {
        self.resolve(Variant::Dark)
    }

    /// Loads the tonal palette regardless of tier.
    pub fn tonal_palette(&self) -> TonalPalette {
        TonalPalette::load(
            &self.resources,
            &self.catalog,
            self.config.synthesis_base_step,
        )
    }
}

/// Whether dynamic color is available at `api_level`, with default
/// thresholds. Reads no resources.
pub fn is_dynamic_color_available(api_level: u32) -> bool {
    ResolverConfig::default().is_dynamic_color_available(api_level)
}

/// Resolves the light scheme with the system catalog and default thresholds.
pub fn dynamic_light_color_scheme<R: ColorResources>(
    resources: R,
    api_level: u32,
) -> DynamicColorScheme {
    SchemeResolver::new(resources, api_level).light()
}

/// Resolves the dark scheme with the system catalog and default thresholds.
pub fn dynamic_dark_color_scheme<R: ColorResources>(
    resources: R,
    api_level: u32,
) -> DynamicColorScheme {
    SchemeResolver::new(resources, api_level).dark()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Argb, resources::MapResources};

    #[test]
    fn test_classify() {
        let config = ResolverConfig::default();
        assert_eq!(ApiTier::classify(0, &config), ApiTier::Unsupported);
        assert_eq!(ApiTier::classify(30, &config), ApiTier::Unsupported);
        assert_eq!(ApiTier::classify(31, &config), ApiTier::TonalPalette);
        assert_eq!(ApiTier::classify(33, &config), ApiTier::TonalPalette);
        assert_eq!(ApiTier::classify(34, &config), ApiTier::FullScheme);
        assert_eq!(ApiTier::classify(36, &config), ApiTier::FullScheme);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = ResolverConfig {
            tonal_min_api: 27,
            full_scheme_min_api: 40,
            ..ResolverConfig::default()
        };
        assert_eq!(ApiTier::classify(27, &config), ApiTier::TonalPalette);
        assert_eq!(ApiTier::classify(36, &config), ApiTier::TonalPalette);
        assert!(config.is_dynamic_color_available(27));
    }

    #[test]
    fn test_availability() {
        assert!(!is_dynamic_color_available(30));
        assert!(is_dynamic_color_available(31));
        assert!(is_dynamic_color_available(35));
    }

    #[test]
    fn test_unsupported_tier_reads_nothing() {
        struct Panicking;

        impl ColorResources for Panicking {
            fn color(
                &self,
                key: &crate::resources::ResourceKey,
            ) -> Result<Argb, crate::resources::ResourceUnavailable> {
                panic!("unexpected lookup of {key}");
            }
        }

        let resolver = SchemeResolver::new(Panicking, 30);
        assert!(resolver.light().is_empty());
        assert!(resolver.dark().is_empty());
    }

    #[test]
    fn test_full_scheme_reads_role_resources() {
        let resources: MapResources = [
            ("system_primary_dark", Argb::new(0xFFD0_BCFF)),
            ("system_primary_light", Argb::new(0xFF67_50A4)),
            ("system_primary_fixed", Argb::new(0xFFEA_DDFF)),
        ]
        .into_iter()
        .collect();
        let resolver = SchemeResolver::new(&resources, 34);

        let dark = resolver.dark();
        assert_eq!(dark.primary, Some(Argb::new(0xFFD0_BCFF)));
        assert_eq!(dark.primary_fixed, Some(Argb::new(0xFFEA_DDFF)));
        assert_eq!(dark.populated(), 2);

        let light = resolver.light();
        assert_eq!(light.primary, Some(Argb::new(0xFF67_50A4)));
        assert_eq!(light.primary_fixed, Some(Argb::new(0xFFEA_DDFF)));
        assert_eq!(light.shadow, None);
    }

    #[test]
    fn test_resolve_with_opens_only_when_needed() {
        let resources: MapResources = [("system_primary_light", Argb::new(0xFF67_50A4))]
            .into_iter()
            .collect();
        let catalog = SystemCatalog::new();
        let config = ResolverConfig::default();
        let opened = std::cell::Cell::new(0);
        let open = || {
            opened.set(opened.get() + 1);
            Ok::<_, String>(&resources)
        };

        let scheme = resolve_with(30, Variant::Light, &catalog, &config, open).unwrap();
        assert!(scheme.is_empty());
        assert_eq!(opened.get(), 0);

        let scheme = resolve_with(34, Variant::Light, &catalog, &config, open).unwrap();
        assert_eq!(scheme.primary, Some(Argb::new(0xFF67_50A4)));
        assert_eq!(opened.get(), 1);

        let failed = resolve_with(32, Variant::Dark, &catalog, &config, || {
            Err::<MapResources, _>("no context".to_owned())
        });
        assert_eq!(failed, Err("no context".to_owned()));
    }
}
