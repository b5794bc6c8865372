//! ArcGIS map service dumper.
//!
//! Dumps every layer of a map service to `<output>/<map>/`:
//! - Feature data as ArcGIS JSON (`data/<layer>.json`)
//! - Symbology translated to SLD (`styles/<layer>.sld`)
//! - Picture marker icons (`styles/<layer>/<icon>.svg|png`)

mod client;
mod config;
mod dump;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use client::ArcGisClient;
use config::DumpConfig;
use symbology::IconFormat;

#[derive(Parser, Debug)]
#[command(name = "agsdump")]
#[command(about = "Dump ArcGIS map service data and SLD styles")]
struct Args {
    /// Map name, used as the output folder
    map_name: String,

    /// Map service URL, e.g. https://host/arcgis/rest/services/Name/MapServer
    service_url: String,

    /// Folder the map folder is created in
    #[arg(long, env = "AGSDUMP_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// How picture marker icons are written (svg or img)
    #[arg(long, env = "AGSDUMP_ICON_FORMAT", default_value = "svg")]
    icon_format: IconFormat,

    /// Skip the feature data pass
    #[arg(long)]
    skip_data: bool,

    /// Skip the styles pass
    #[arg(long)]
    skip_styles: bool,

    /// Log level
    #[arg(long, env = "AGSDUMP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder().with_max_level(level).with_target(false);
    if args.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let mut config = DumpConfig::new(&args.output_dir, &args.map_name, &args.service_url);
    config.icon_format = args.icon_format;
    config.dump_data = !args.skip_data;
    config.dump_styles = !args.skip_styles;

    info!(
        map = %config.map_name,
        url = %config.service_url,
        output = %config.root.display(),
        icon_format = %config.icon_format,
        "Starting dump"
    );

    let client = ArcGisClient::new(&config.service_url)?;
    let summary = dump::run(&config, &client)?;

    info!(
        data_files = summary.data_files,
        styles_written = summary.styles_written,
        styles_skipped = summary.styles_skipped,
        "Dump complete"
    );

    Ok(())
}
