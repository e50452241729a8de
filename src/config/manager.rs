//! Configuration Manager

use super::{FormatOptions, QuoteStyle, TrailingComma};
use crate::error::ConfigError;
use crate::Result;
use std::path::{Path, PathBuf};

/// File names probed during discovery, in precedence order
const CONFIG_FILE_NAMES: &[&str] = &[
    "styleconf.toml",
    "styleconf.json",
    "styleconf.yaml",
    "styleconf.yml",
];

/// Manages loading and validation of formatting options
pub struct ConfigManager;

impl ConfigManager {
    /// Load formatting options from a config file.
    ///
    /// The parser is chosen by file extension. A missing file falls back to
    /// the built-in defaults.
    pub fn load_from_file(path: &Path) -> Result<FormatOptions> {
        if path.exists() {
            tracing::info!("Loading formatting options from: {}", path.display());
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

            let options = Self::parse(path, &content)?;

            options.validate()?;

            tracing::info!("Formatting options loaded and validated successfully");
            Ok(options)
        } else {
            tracing::warn!(
                "Config file not found at {}, using built-in defaults",
                path.display()
            );
            let options = FormatOptions::default();
            options.validate()?;
            Ok(options)
        }
    }

    /// Load formatting options from environment variables
    pub fn load_from_env() -> Result<FormatOptions> {
        let mut options = FormatOptions::default();

        if let Ok(width) = std::env::var("STYLECONF_INDENT_WIDTH") {
            options.indent_width = width.parse::<usize>().map_err(|_| {
                ConfigError::validation(
                    "STYLECONF_INDENT_WIDTH",
                    format!("not a non-negative integer: {width}"),
                )
            })?;
        }

        if let Ok(width) = std::env::var("STYLECONF_MAX_LINE_WIDTH") {
            options.max_line_width = width.parse::<usize>().map_err(|_| {
                ConfigError::validation(
                    "STYLECONF_MAX_LINE_WIDTH",
                    format!("not a non-negative integer: {width}"),
                )
            })?;
        }

        if let Ok(style) = std::env::var("STYLECONF_QUOTE_STYLE") {
            options.quote_style = style.parse::<QuoteStyle>().map_err(|_| {
                ConfigError::validation(
                    "STYLECONF_QUOTE_STYLE",
                    format!("must be 'single' or 'double', got '{style}'"),
                )
            })?;
        }

        if let Ok(policy) = std::env::var("STYLECONF_TRAILING_COMMA") {
            options.trailing_comma = policy.parse::<TrailingComma>().map_err(|_| {
                ConfigError::validation(
                    "STYLECONF_TRAILING_COMMA",
                    format!("must be 'none', 'es5', or 'all', got '{policy}'"),
                )
            })?;
        }

        if let Ok(semicolons) = std::env::var("STYLECONF_USE_SEMICOLONS") {
            options.use_semicolons = semicolons.parse::<bool>().map_err(|_| {
                ConfigError::validation(
                    "STYLECONF_USE_SEMICOLONS",
                    format!("must be 'true' or 'false', got '{semicolons}'"),
                )
            })?;
        }

        options.validate()?;
        Ok(options)
    }

    /// Find the nearest config file, walking up from `start_dir`
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        for dir in start_dir.ancestors() {
            for name in CONFIG_FILE_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    tracing::debug!("Discovered config file: {}", candidate.display());
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Deserialize config file content, dispatching on the file extension
    fn parse(path: &Path, content: &str) -> Result<FormatOptions> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "toml" => toml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            "json" => serde_json::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl FormatOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.validate_layout()?;
        self.validate_imports()?;
        self.validate_plugins()?;
        Ok(())
    }

    /// Validate layout options
    fn validate_layout(&self) -> Result<()> {
        if self.indent_width == 0 {
            return Err(ConfigError::validation(
                "indent_width",
                "must be greater than 0",
            ));
        }

        if self.indent_width > 16 {
            return Err(ConfigError::validation(
                "indent_width",
                "cannot exceed 16",
            ));
        }

        if self.max_line_width == 0 {
            return Err(ConfigError::validation(
                "max_line_width",
                "must be greater than 0",
            ));
        }

        if self.max_line_width > 10_000 {
            return Err(ConfigError::validation(
                "max_line_width",
                "cannot exceed 10,000",
            ));
        }

        Ok(())
    }

    /// Validate import-sorting options
    fn validate_imports(&self) -> Result<()> {
        for (i, pattern) in self.import_group_patterns.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigError::validation(
                    "import_group_patterns",
                    format!("pattern {i} is empty"),
                ));
            }

            if let Err(e) = regex::Regex::new(pattern) {
                return Err(ConfigError::validation(
                    "import_group_patterns",
                    format!("pattern '{pattern}' does not compile: {e}"),
                ));
            }
        }

        Ok(())
    }

    /// Validate plugin identifiers
    fn validate_plugins(&self) -> Result<()> {
        for (i, id) in self.enabled_plugins.iter().enumerate() {
            if id.is_empty() {
                return Err(ConfigError::validation(
                    "enabled_plugins",
                    format!("plugin {i} has an empty identifier"),
                ));
            }

            // Order encodes application order, so a repeated id is ambiguous
            if self.enabled_plugins[..i].contains(id) {
                return Err(ConfigError::validation(
                    "enabled_plugins",
                    format!("plugin '{id}' is listed more than once"),
                ));
            }
        }

        Ok(())
    }

    /// Merge with CLI arguments
    pub fn merge_with_cli_args(
        &mut self,
        indent_width: Option<usize>,
        max_line_width: Option<usize>,
        quote_style: Option<&str>,
        trailing_comma: Option<&str>,
        no_semicolons: bool,
    ) {
        if let Some(width) = indent_width {
            self.indent_width = width;
            tracing::info!("CLI override: indent width set to {}", width);
        }

        if let Some(width) = max_line_width {
            self.max_line_width = width;
            tracing::info!("CLI override: max line width set to {}", width);
        }

        if let Some(style) = quote_style {
            match style.parse::<QuoteStyle>() {
                Ok(parsed) => {
                    self.quote_style = parsed;
                    tracing::info!("CLI override: quote style set to {}", parsed);
                }
                Err(_) => {
                    tracing::warn!("Invalid quote style provided: {}", style);
                }
            }
        }

        if let Some(policy) = trailing_comma {
            match policy.parse::<TrailingComma>() {
                Ok(parsed) => {
                    self.trailing_comma = parsed;
                    tracing::info!("CLI override: trailing comma policy set to {}", parsed);
                }
                Err(_) => {
                    tracing::warn!("Invalid trailing comma policy provided: {}", policy);
                }
            }
        }

        if no_semicolons {
            self.use_semicolons = false;
            tracing::info!("CLI override: statement terminators disabled");
        }
    }
}
