use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_amount, validate_term, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ssp-calc")]
#[command(about = "Software Support and Pricing calculator: 85% upfront license, 15% support")]
pub struct CliConfig {
    /// Total contract amount; omit to start the interactive form
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// Contract term in months (defaults to the configured default, else 12)
    #[arg(short, long, allow_negative_numbers = true)]
    pub term: Option<i64>,

    /// Run the interactive form even when --amount is given
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.amount.is_none()
    }

    /// Loads the config file (if any) and applies command-line overrides.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.to_settings()?
            }
            None => Settings::default(),
        };

        // 命令列覆蓋設定
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(term) = self.term {
            settings.default_term = validate_term("contract_term", term)?;
        }
        Ok(settings)
    }

    /// Term for one-shot mode: `--term` if given, else the configured default.
    /// In interactive mode `--term` becomes the form's starting and reset term
    /// through [`CliConfig::resolve_settings`].
    pub fn effective_term(&self, settings: &Settings) -> i64 {
        self.term.unwrap_or_else(|| i64::from(settings.default_term))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(term) = self.term {
            validate_term("contract_term", term)?;
        }
        // 互動模式下金額由表單自行驗證
        if self.is_interactive() {
            return Ok(());
        }
        if let Some(amount) = self.amount {
            validate_positive_amount("contract_amount", amount)?;
        }
        Ok(())
    }
}
