use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dynamic_color::{Argb, Variant};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "dynamic-color")]
#[command(version, about = "Resolve Material dynamic color schemes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a scheme from an exported resource table
    Resolve {
        /// JSON object mapping resource names to `#AARRGGBB` colors
        resources: PathBuf,
        /// API level of the device the table was exported from
        #[arg(short, long)]
        api_level: u32,
        /// Scheme variant
        #[arg(short, long, default_value = "light")]
        variant: Variant,
        /// Prefix of the resource names
        #[arg(long, default_value = "system_")]
        prefix: String,
        /// Name key colors `{palette}_palette_key_color_{variant}` like other roles
        #[arg(long)]
        role_key_colors: bool,
        /// Tonal step whose color seeds synthesized neutral tones
        #[arg(long, default_value_t = 600)]
        base_step: u16,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Report whether an API level supports dynamic color
    Available {
        /// API level to check
        api_level: u32,
    },
    /// Move a color to another tone, keeping its hue
    SetLuminance {
        /// Source color, `#RRGGBB` or `#AARRGGBB`
        color: Argb,
        /// Target tone, 0 (black) to 100 (white)
        tone: f64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Role table with color swatches
    Table,
    /// Role name to color JSON object
    Json,
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,dynamic_color=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Resolve {
            resources,
            api_level,
            variant,
            prefix,
            role_key_colors,
            base_step,
            format,
        } => {
            commands::resolve::execute(commands::resolve::ResolveOptions {
                resources,
                api_level,
                variant,
                prefix,
                role_key_colors,
                base_step,
                format,
            })?;
        }
        Commands::Available { api_level } => {
            commands::available::execute(api_level);
        }
        Commands::SetLuminance { color, tone } => {
            commands::luminance::execute(color, tone)?;
        }
    }

    Ok(())
}
