use clap::Parser;
use ssp_calculator::adapters::{JsonPresenter, TextPresenter};
use ssp_calculator::utils::{error::SspError, logger, validation::Validate};
use ssp_calculator::{
    calculate, CalculatorForm, CliConfig, OutputFormat, Presenter, Session, Settings,
};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // 先載入配置，日誌等級可能來自配置檔
    let resolved = config.resolve_settings();
    let configured_level = resolved
        .as_ref()
        .ok()
        .and_then(|settings| settings.log_level.clone());

    // 初始化日誌
    let directive = logger::default_directive(config.verbose, configured_level.as_deref());
    if config.json_logs {
        logger::init_json_logger(&directive);
    } else {
        logger::init_cli_logger(&directive);
    }

    tracing::info!("Starting ssp-calc");
    tracing::debug!("CLI config: {:?}", config);
    if let Some(path) = &config.config {
        tracing::info!("📁 Configuration file: {}", path);
    }

    let settings = match resolved {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let outcome = if config.is_interactive() {
        run_interactive(&settings)
    } else {
        run_once(&config, &settings)
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }
}

fn run_once(config: &CliConfig, settings: &Settings) -> ssp_calculator::Result<()> {
    let amount = config.amount.unwrap_or_default();
    let breakdown = calculate(amount, config.effective_term(settings))?;

    match settings.format {
        OutputFormat::Text => TextPresenter::new(io::stdout()).show_results(&breakdown),
        OutputFormat::Json => JsonPresenter::new(io::stdout()).show_results(&breakdown),
    }
}

fn run_interactive(settings: &Settings) -> ssp_calculator::Result<()> {
    tracing::info!("🧮 Interactive form (default term: {} months)", settings.default_term);
    let form = CalculatorForm::new(settings.default_term);
    let stdin = io::stdin().lock();

    // JSON 模式下提示文字走 stderr，stdout 只輸出 JSON
    let handled = match settings.format {
        OutputFormat::Text => {
            Session::new(stdin, io::stdout(), TextPresenter::new(io::stdout()), form).run()?
        }
        OutputFormat::Json => {
            Session::new(stdin, io::stderr(), JsonPresenter::new(io::stdout()), form).run()?
        }
    };

    tracing::info!("✅ Session finished after {} commands", handled);
    Ok(())
}

fn exit_with(e: &SspError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
