use crate::config::{OutputFormat, Settings};
use crate::utils::error::{Result, SspError};
use crate::utils::validation::{validate_non_empty_string, validate_term, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    pub default_term: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SspError::ConfigError {
            message: format!("Cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SspError::TomlError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${SSP_DEFAULT_TERM})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn default_term(&self) -> Result<Option<u32>> {
        self.form
            .default_term
            .map(|term| validate_term("form.default_term", term))
            .transpose()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .format
            .as_deref()
            .map(|raw| {
                raw.parse::<OutputFormat>()
                    .map_err(|reason| SspError::ConfigError {
                        message: format!("output.format: {}", reason),
                    })
            })
            .transpose()
    }

    /// Converts into [`Settings`], filling gaps with built-in defaults.
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate()?;
        let defaults = Settings::default();
        Ok(Settings {
            default_term: self.default_term()?.unwrap_or(defaults.default_term),
            format: self.output_format()?.unwrap_or(defaults.format),
            log_level: self.logging.level.clone(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 預設月數
        if let Some(term) = self.form.default_term {
            validate_term("form.default_term", term).map_err(|e| SspError::ConfigError {
                message: e.to_string(),
            })?;
        }

        self.output_format()?;

        if let Some(level) = &self.logging.level {
            validate_non_empty_string("logging.level", level).map_err(|e| {
                SspError::ConfigError {
                    message: e.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[form]
default_term = 36

[output]
format = "json"

[logging]
level = "ssp_calculator=debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.to_settings().unwrap();
        assert_eq!(settings.default_term, 36);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.log_level.as_deref(), Some("ssp_calculator=debug"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.to_settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SSP_TEST_DEFAULT_TERM", "18");

        let toml_content = r#"
[form]
default_term = ${SSP_TEST_DEFAULT_TERM}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.default_term().unwrap(), Some(18));

        std::env::remove_var("SSP_TEST_DEFAULT_TERM");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[output]
format = "${SSP_TEST_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output.format.as_deref(),
            Some("${SSP_TEST_SURELY_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[form]\ndefault_term = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(SspError::ConfigError { .. })));

        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = TomlConfig::from_toml_str("[form]\nsplit = 0.5\n");
        assert!(matches!(result, Err(SspError::TomlError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[form]\ndefault_term = 24\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.to_settings().unwrap().default_term, 24);
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/definitely/not/here/ssp.toml");
        assert!(matches!(result, Err(SspError::ConfigError { .. })));
    }
}
