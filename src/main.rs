//! Styleconf - Formatting Options Resolver
//!
//! Resolves the formatting options consumed by the formatting engine and
//! its plugins, validates them, and emits the result.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use styleconf::{config::ConfigManager, FormatOptions, OptionsStore};

/// CLI arguments for styleconf
#[derive(Parser, Debug)]
#[command(name = "styleconf")]
#[command(about = "Resolve and validate formatting options")]
#[command(version)]
#[command(long_about = "
styleconf - formatting options resolver

Resolution priority (highest to lowest):
1. Command-line arguments
2. Configuration file
3. Environment variables
4. Built-in defaults

Environment variables:
  STYLECONF_INDENT_WIDTH    - Spaces per indent level
  STYLECONF_MAX_LINE_WIDTH  - Soft wrap column
  STYLECONF_QUOTE_STYLE     - Quote style (single, double)
  STYLECONF_TRAILING_COMMA  - Trailing comma policy (none, es5, all)
  STYLECONF_USE_SEMICOLONS  - Emit statement terminators (true/false)
")]
pub struct CliArgs {
    /// Configuration file path (discovered from the working directory if omitted)
    #[arg(short, long, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    /// Indent width (overrides config file)
    #[arg(long, help = "Spaces per indent level")]
    pub indent_width: Option<usize>,

    /// Max line width (overrides config file)
    #[arg(long, help = "Soft wrap column")]
    pub max_line_width: Option<usize>,

    /// Quote style (overrides config file)
    #[arg(long, help = "Quote style (single, double)")]
    pub quote_style: Option<String>,

    /// Trailing comma policy (overrides config file)
    #[arg(long, help = "Trailing comma policy (none, es5, all)")]
    pub trailing_comma: Option<String>,

    /// Disable statement terminators (overrides config file)
    #[arg(long, help = "Disable statement terminators")]
    pub no_semicolons: bool,

    /// Output format for the resolved options
    #[arg(long, default_value = "toml", help = "Output format (toml, json, yaml)")]
    pub emit: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", help = "Log level")]
    pub log_level: String,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration and exit")]
    pub validate_config: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_tracing(&args)?;

    // Resolve options with priority: CLI args > config file > environment > defaults
    let config_path = args.config.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|dir| ConfigManager::discover(&dir))
    });

    let mut options = match &config_path {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => {
            info!("No config file found, checking environment variables");
            ConfigManager::load_from_env()?
        }
    };

    // Apply CLI argument overrides (highest priority)
    options.merge_with_cli_args(
        args.indent_width,
        args.max_line_width,
        args.quote_style.as_deref(),
        args.trailing_comma.as_deref(),
        args.no_semicolons,
    );

    // Final validation after all overrides
    options
        .validate()
        .context("Final options validation failed")?;

    if args.validate_config {
        info!("Configuration is valid");
        info!("Options summary:");
        info!("  Indent width: {}", options.indent_width);
        info!("  Max line width: {}", options.max_line_width);
        info!("  Quote style: {}", options.quote_style);
        info!("  Trailing comma: {}", options.trailing_comma);
        info!(
            "  Semicolons: {}",
            if options.use_semicolons {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!("  Import groups: {}", options.import_group_patterns.len());
        info!("  Plugins: {}", options.enabled_plugins.join(", "));
        return Ok(());
    }

    // Load the store once; everything downstream reads from it
    let store = OptionsStore::new();
    let options = store
        .load_with(options)
        .context("Failed to load formatting options")?;

    emit(options, &args.emit)
}

/// Print the resolved options to stdout in the requested format
fn emit(options: &FormatOptions, format: &str) -> Result<()> {
    let rendered = match format {
        "toml" => toml::to_string_pretty(options)?,
        "json" => serde_json::to_string_pretty(options)?,
        "yaml" => serde_yaml::to_string(options)?,
        other => anyhow::bail!("unsupported output format: {}", other),
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(args: &CliArgs) -> Result<()> {
    let log_level = if args.verbose {
        "debug"
    } else {
        &args.log_level
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Logs go to stderr; stdout carries the emitted options
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(env_filter)
        .init();

    Ok(())
}
