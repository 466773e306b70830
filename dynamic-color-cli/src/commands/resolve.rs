use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use dynamic_color::{
    DynamicColorScheme, KeyColorNaming, ResolverConfig, SchemeResolver, SystemCatalog, Variant,
};
use tracing::info;

use crate::{Format, commands, output};

pub struct ResolveOptions {
    pub resources: PathBuf,
    pub api_level: u32,
    pub variant: Variant,
    pub prefix: String,
    pub role_key_colors: bool,
    pub base_step: u16,
    pub format: Format,
}

pub fn execute(options: ResolveOptions) -> Result<()> {
    let resources = commands::load_resources(&options.resources)?;
    info!(
        path = %options.resources.display(),
        colors = resources.len(),
        "loaded resource table"
    );

    let resolver = SchemeResolver::new(&resources, options.api_level)
        .with_catalog(SystemCatalog::with_prefix(options.prefix).with_key_colors(
            if options.role_key_colors {
                KeyColorNaming::Role
            } else {
                KeyColorNaming::Platform
            },
        ))
        .with_config(ResolverConfig {
            synthesis_base_step: options.base_step,
            ..ResolverConfig::default()
        });
    let scheme = resolver.resolve(options.variant);

    output::status(
        "Resolved",
        format!(
            "{} scheme, {:?} tier, {} roles populated",
            options.variant,
            resolver.tier(),
            scheme.populated()
        ),
    );
    if !resolver.is_dynamic_color_available() {
        output::warn(format!(
            "API {} has no dynamic color; every role is absent",
            options.api_level
        ));
    }

    match options.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&scheme)?),
        Format::Table => println!("{}", scheme_table(&scheme)),
    }
    Ok(())
}

fn scheme_table(scheme: &DynamicColorScheme) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(vec![
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Color").fg(Color::Cyan),
            Cell::new("").fg(Color::Cyan),
        ]));

    for (role, color) in scheme.iter() {
        let row = match color {
            Some(color) => vec![
                Cell::new(role.name()),
                Cell::new(color.to_string()),
                commands::swatch(color),
            ],
            None => vec![
                Cell::new(role.name()),
                Cell::new("absent").fg(Color::DarkGrey),
                Cell::new(""),
            ],
        };
        table.add_row(Row::from(row));
    }
    table
}
