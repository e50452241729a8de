//! Formatting Option Types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Preferred string delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    Single,
    Double,
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Single => write!(f, "single"),
            QuoteStyle::Double => write!(f, "double"),
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(QuoteStyle::Single),
            "double" => Ok(QuoteStyle::Double),
            other => Err(ConfigError::validation(
                "quote_style",
                format!("must be 'single' or 'double', got '{other}'"),
            )),
        }
    }
}

/// Trailing-comma policy for multi-line lists and records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    /// Never emit a trailing comma
    None,
    /// Emit where pre-ES2017 consumers accept one
    Es5,
    /// Emit after every last element
    All,
}

impl fmt::Display for TrailingComma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailingComma::None => write!(f, "none"),
            TrailingComma::Es5 => write!(f, "es5"),
            TrailingComma::All => write!(f, "all"),
        }
    }
}

impl FromStr for TrailingComma {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TrailingComma::None),
            "es5" => Ok(TrailingComma::Es5),
            "all" => Ok(TrailingComma::All),
            other => Err(ConfigError::validation(
                "trailing_comma",
                format!("must be 'none', 'es5', or 'all', got '{other}'"),
            )),
        }
    }
}

/// Formatting preferences consumed by the formatting engine and its plugins.
///
/// Immutable once loaded into an [`OptionsStore`](super::OptionsStore).
/// Fields missing from a config file take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Whether statement terminators are emitted
    pub use_semicolons: bool,
    /// Space-equivalent units per indent level
    pub indent_width: usize,
    /// Preferred string delimiter
    pub quote_style: QuoteStyle,
    /// Soft wrap column
    pub max_line_width: usize,
    /// Trailing-comma policy
    pub trailing_comma: TrailingComma,
    /// Ordered patterns used to bucket import statements; earlier patterns win
    pub import_group_patterns: Vec<String>,
    /// Insert a blank line between import buckets
    pub separate_import_groups: bool,
    /// Alphabetize named imports within a statement
    pub sort_import_specifiers: bool,
    /// Plugin identifiers, applied in listed order
    pub enabled_plugins: Vec<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_semicolons: false,
            indent_width: 2,
            quote_style: QuoteStyle::Single,
            max_line_width: 120,
            trailing_comma: TrailingComma::None,
            import_group_patterns: vec![
                "^@/components/(.*)$".to_string(),
                "^@/assets/(.*)$".to_string(),
                "^[./]".to_string(),
            ],
            separate_import_groups: true,
            sort_import_specifiers: true,
            enabled_plugins: vec![
                "import-sort-plugin".to_string(),
                "utility-class-sort-plugin".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_the_shipped_literal() {
        let options = FormatOptions::default();

        assert!(!options.use_semicolons);
        assert_eq!(options.indent_width, 2);
        assert_eq!(options.quote_style, QuoteStyle::Single);
        assert_eq!(options.max_line_width, 120);
        assert_eq!(options.trailing_comma, TrailingComma::None);
        assert_eq!(options.import_group_patterns.len(), 3);
        assert!(options.separate_import_groups);
        assert!(options.sort_import_specifiers);
        assert_eq!(
            options.enabled_plugins,
            vec!["import-sort-plugin", "utility-class-sort-plugin"]
        );
    }

    #[test]
    fn test_enum_values_parse_lowercase() {
        assert_eq!("single".parse::<QuoteStyle>().unwrap(), QuoteStyle::Single);
        assert_eq!("double".parse::<QuoteStyle>().unwrap(), QuoteStyle::Double);
        assert_eq!("es5".parse::<TrailingComma>().unwrap(), TrailingComma::Es5);
        assert!("triple".parse::<QuoteStyle>().is_err());
        assert!("some".parse::<TrailingComma>().is_err());
    }

    #[test]
    fn test_enum_display_round_trips() {
        for style in [QuoteStyle::Single, QuoteStyle::Double] {
            assert_eq!(style.to_string().parse::<QuoteStyle>().unwrap(), style);
        }
        for policy in [TrailingComma::None, TrailingComma::Es5, TrailingComma::All] {
            assert_eq!(policy.to_string().parse::<TrailingComma>().unwrap(), policy);
        }
    }

    #[test]
    fn test_enums_deserialize_from_lowercase_strings() {
        let options: FormatOptions =
            toml::from_str("quote_style = \"double\"\ntrailing_comma = \"all\"").unwrap();
        assert_eq!(options.quote_style, QuoteStyle::Double);
        assert_eq!(options.trailing_comma, TrailingComma::All);
    }
}
