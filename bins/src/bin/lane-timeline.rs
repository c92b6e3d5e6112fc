// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Lane Timeline project*
//!
//! Lay out the timelines in a JSON document and write them as JSON or SVG
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use directories_next::ProjectDirs;
use lane_timeline_core::ZoomLevel;
use lane_timeline_renderer::{DocumentRender, Engine, RenderConfig, document_svg};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "LaneTimeline";
const APPLICATION_NAME: &str = "LaneTimeline";
const CONFIG_FILE_NAME: &str = "config.json";

/// Lane timeline entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("lane_timeline")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    // Render config
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error loading config: {error}");
            std::process::exit(1);
        }
    };

    // Read the document ("-" is stdin)
    let json = if args.input.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        json
    } else {
        match fs::read_to_string(&args.input) {
            Ok(json) => json,
            Err(error) => {
                eprintln!("Error reading {}: {error}", args.input.display());
                std::process::exit(1);
            }
        }
    };

    let mut engine = Engine::new(config);
    if let Err(error) = engine.load_json(&json) {
        eprintln!("Invalid document: {error}");
        std::process::exit(1);
    }

    // Zoom level (the config's default if not given)
    if let Some(zoom) = args.zoom {
        match ZoomLevel::try_from(zoom) {
            Ok(zoom) => engine.set_zoom(zoom),
            Err(error) => {
                eprintln!("Invalid zoom level: {error}");
                std::process::exit(1);
            }
        }
    }
    info!("Rendering at {} per grid unit", engine.zoom_label());

    let render = engine.render();
    let output = match args.format {
        Format::Json => serde_json::to_string_pretty::<DocumentRender>(&render)? + "\n",
        Format::Svg => document_svg(&render, engine.config()),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!("Written to {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

/// Load the config at the path given, else the one in the user's config
/// directory (if there is one), else the default
fn load_config(args: &Cli) -> Result<RenderConfig, lane_timeline_renderer::ConfigError> {
    if let Some(path) = &args.config {
        return RenderConfig::load(path);
    }
    if let Some(project_dirs) = ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME) {
        let path = project_dirs.config_dir().join(CONFIG_FILE_NAME);
        if path.exists() {
            return RenderConfig::load(&path);
        }
        debug!("No config at {}", path.display());
    }
    info!("Using the default render config");
    Ok(RenderConfig::default())
}

/// Lane timeline CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lay out multi-entity, multi-day timelines",
    after_help = "The input is a JSON document of category colours and timelines"
)]
pub struct Cli {
    /// Path to the JSON document ("-" for stdin)
    #[arg(long)]
    pub input: PathBuf,

    /// Minutes per grid unit
    #[arg(long)]
    pub zoom: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,

    /// Where to write the output (stdout if not given)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Path to a render config (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug information
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Svg,
}

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Svg]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Format::Json => Some(PossibleValue::new("json").help("The layout as JSON")),
            Format::Svg => Some(PossibleValue::new("svg").help("The timelines drawn as SVG")),
        }
    }
}
