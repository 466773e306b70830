use dynamic_color::{ApiTier, ResolverConfig};

use crate::output;

pub fn execute(api_level: u32) {
    let tier = ApiTier::classify(api_level, &ResolverConfig::default());
    let description = match tier {
        ApiTier::Unsupported => "no dynamic color",
        ApiTier::TonalPalette => "tonal palette resources",
        ApiTier::FullScheme => "per-role scheme resources",
    };
    output::status("API", format!("{api_level}: {description}"));
    println!("{}", dynamic_color::is_dynamic_color_available(api_level));
}
