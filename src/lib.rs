pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat, Settings};
pub use core::{
    calculator::{calculate, calculate_input},
    form::CalculatorForm,
    format::format_currency,
    session::{Command, Session},
};
pub use domain::model::{ContractInput, SspBreakdown};
pub use domain::ports::Presenter;
pub use utils::error::{Result, SspError};
