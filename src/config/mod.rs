#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VARIANTS: [&'static str; 2] = ["text", "json"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unsupported format '{}'. Valid formats: {}",
                other,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// Settings after merging the config file with command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_term: u32,
    pub format: OutputFormat,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_term: crate::domain::model::DEFAULT_CONTRACT_TERM,
            format: OutputFormat::default(),
            log_level: None,
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
