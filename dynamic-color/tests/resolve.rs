use dynamic_color::{
    Argb, ColorRole, ColorResources, DynamicColorScheme, MapResources, ResourceKey,
    ResourceUnavailable, SchemeResolver, TonalPalette, TonalRange, Variant,
    dynamic_dark_color_scheme, dynamic_light_color_scheme,
    palette::{DIRECT_TONES, SYNTHESIZED_TONES, step_for_tone},
    roles::tonal_roles,
    scheme_from_palette, set_luminance,
};

/// Baseline purple primary range.
fn primary(tone: u8) -> Option<Argb> {
    let value = match tone {
        0 => 0xFF00_0000,
        10 => 0xFF21_005D,
        20 => 0xFF38_1E72,
        30 => 0xFF4F_378B,
        40 => 0xFF67_50A4,
        50 => 0xFF7F_67BE,
        60 => 0xFF9A_82DB,
        70 => 0xFFB6_9DF8,
        80 => 0xFFD0_BCFF,
        90 => 0xFFEA_DDFF,
        95 => 0xFFF6_EDFF,
        99 => 0xFFFF_FBFE,
        100 => 0xFFFF_FFFF,
        _ => return None,
    };
    Some(Argb::new(value))
}

/// A distinct color per `(range, tone)` outside the primary range.
fn tagged(range: TonalRange, tone: u8) -> Argb {
    Argb::new(0xFF00_0000 | ((range as u32) << 16) | tone as u32)
}

fn synthetic_palette() -> TonalPalette {
    TonalPalette::from_fn(|range, tone| match range {
        TonalRange::Primary => primary(tone),
        _ => Some(tagged(range, tone)),
    })
}

fn seed_resources() -> MapResources {
    let families = [
        ("neutral1", Argb::from_rgb(0x60, 0x5D, 0x62)),
        ("neutral2", Argb::from_rgb(0x60, 0x5D, 0x71)),
        ("accent1", Argb::from_rgb(0x67, 0x50, 0xA4)),
        ("accent2", Argb::from_rgb(0x62, 0x5B, 0x71)),
        ("accent3", Argb::from_rgb(0x7D, 0x52, 0x60)),
    ];
    let mut resources = MapResources::new();
    for (family, base) in families {
        for tone in DIRECT_TONES {
            resources.insert(
                format!("system_{family}_{}", step_for_tone(tone)),
                set_luminance(base, tone as f64),
            );
        }
    }
    resources
}

struct CountingResources<'a> {
    inner: &'a MapResources,
    lookups: std::cell::Cell<usize>,
}

impl ColorResources for CountingResources<'_> {
    fn color(&self, key: &ResourceKey) -> Result<Argb, ResourceUnavailable> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.color(key)
    }
}

#[test]
fn unsupported_release_resolves_to_default_scheme() {
    let resources = seed_resources();
    for api_level in [0, 21, 29, 30] {
        assert_eq!(
            dynamic_light_color_scheme(&resources, api_level),
            DynamicColorScheme::default()
        );
        assert_eq!(
            dynamic_dark_color_scheme(&resources, api_level),
            DynamicColorScheme::default()
        );
    }
}

#[test]
fn unsupported_release_performs_no_lookups() {
    let resources = seed_resources();
    let counting = CountingResources {
        inner: &resources,
        lookups: std::cell::Cell::new(0),
    };
    let resolver = SchemeResolver::new(&counting, 30);
    assert!(resolver.light().is_empty());
    assert!(resolver.dark().is_empty());
    assert_eq!(counting.lookups.get(), 0);
}

#[test]
fn dark_projection_uses_exact_primary_tones() {
    let scheme = scheme_from_palette(&synthetic_palette(), Variant::Dark);
    assert_eq!(scheme.primary, primary(80));
    assert_eq!(scheme.on_primary, primary(20));
    assert_eq!(scheme.primary_container, primary(30));
    assert_eq!(scheme.on_primary_container, primary(90));
    assert_eq!(scheme.primary, Some(Argb::new(0xFFD0_BCFF)));
    assert_eq!(scheme.on_primary_container, Some(Argb::new(0xFFEA_DDFF)));
}

#[test]
fn light_projection_uses_exact_primary_tones() {
    let scheme = scheme_from_palette(&synthetic_palette(), Variant::Light);
    assert_eq!(scheme.primary, primary(40));
    assert_eq!(scheme.on_primary, primary(100));
    assert_eq!(scheme.primary_container, primary(90));
    assert_eq!(scheme.on_primary_container, primary(10));
    assert_eq!(scheme.primary, Some(Argb::new(0xFF67_50A4)));
    assert_eq!(scheme.on_primary, Some(Argb::WHITE));
}

#[test]
fn projection_follows_the_role_table() {
    let palette = synthetic_palette();
    for variant in Variant::ALL {
        let scheme = scheme_from_palette(&palette, variant);
        for &(role, range, tone) in tonal_roles(variant) {
            assert_eq!(scheme.get(role), palette.get(range, tone), "{role} {variant}");
        }
        assert_eq!(scheme.populated(), tonal_roles(variant).len());
        assert_eq!(scheme.shadow, None);
        assert_eq!(scheme.error, None);
    }

    let dark = scheme_from_palette(&palette, Variant::Dark);
    assert_eq!(dark.surface, Some(tagged(TonalRange::NeutralVariant, 6)));
    assert_eq!(
        dark.surface_container_highest,
        Some(tagged(TonalRange::NeutralVariant, 22))
    );
    let light = scheme_from_palette(&palette, Variant::Light);
    assert_eq!(light.surface, Some(tagged(TonalRange::NeutralVariant, 98)));
    assert_eq!(light.outline, Some(tagged(TonalRange::NeutralVariant, 50)));
}

#[test]
fn tonal_release_resolves_from_resources() {
    let resources = seed_resources();
    let resolver = SchemeResolver::new(&resources, 32);

    let palette = resolver.tonal_palette();
    let light = resolver.light();
    let dark = resolver.dark();

    assert_eq!(
        light.primary,
        resources
            .color(&ResourceKey::from_static("system_accent1_600"))
            .ok()
    );
    assert_eq!(
        dark.primary,
        resources
            .color(&ResourceKey::from_static("system_accent1_200"))
            .ok()
    );
    assert_eq!(light.surface, palette.get(TonalRange::NeutralVariant, 98));
    assert!(light.surface.is_some());
    assert!(dark.surface_container_lowest.is_some());
    assert_eq!(light.populated(), tonal_roles(Variant::Light).len());
    assert_eq!(dark.populated(), tonal_roles(Variant::Dark).len());
}

#[test]
fn missing_base_propagates_to_synthesized_roles_only() {
    let mut resources = seed_resources();
    resources.remove(&ResourceKey::from_static("system_neutral2_600"));
    let resolver = SchemeResolver::new(&resources, 33);
    let palette = resolver.tonal_palette();

    for tone in SYNTHESIZED_TONES {
        assert_eq!(palette.get(TonalRange::NeutralVariant, tone), None);
    }
    for tone in DIRECT_TONES.into_iter().filter(|&tone| tone != 40) {
        assert!(palette.get(TonalRange::NeutralVariant, tone).is_some());
    }

    let light = resolver.light();
    // Synthesized neutral-variant tones.
    assert_eq!(light.surface, None);
    assert_eq!(light.surface_container, None);
    // Direct neutral-variant tones.
    assert!(light.on_surface.is_some());
    assert!(light.surface_variant.is_some());
    assert!(light.primary.is_some());
}

#[test]
fn full_scheme_release_ignores_tonal_resources() {
    let mut resources = seed_resources();
    resources.insert("system_surface_container_high_dark", Argb::new(0xFF2B_2930));
    let resolver = SchemeResolver::new(&resources, 35);

    let dark = resolver.dark();
    assert_eq!(dark.surface_container_high, Some(Argb::new(0xFF2B_2930)));
    assert_eq!(dark.populated(), 1);
    assert!(resolver.light().is_empty());
}

#[test]
fn resolution_is_deterministic() {
    let resources = seed_resources();
    for api_level in [30, 31, 33, 34] {
        let resolver = SchemeResolver::new(&resources, api_level);
        for variant in Variant::ALL {
            assert_eq!(resolver.resolve(variant), resolver.resolve(variant));
        }
    }
}

#[test]
fn to_map_lists_every_role() {
    let scheme = scheme_from_palette(&synthetic_palette(), Variant::Light);
    let map = scheme.to_map();
    assert_eq!(map.len(), ColorRole::ALL.len());
    assert!(map.contains(&("primary", Some(0xFF67_50A4))));
    assert!(map.contains(&("shadow", None)));
}
