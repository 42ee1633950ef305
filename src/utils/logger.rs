use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "ssp_calc=info,ssp_calculator=info";
const VERBOSE_DIRECTIVE: &str = "ssp_calc=debug,ssp_calculator=debug,info";

/// Filter used when `RUST_LOG` is unset: `-v` wins, then the configured
/// `[logging] level`, then the built-in default. Covers both the library
/// target and the `ssp_calc` binary target.
pub fn default_directive(verbose: bool, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (true, _) => VERBOSE_DIRECTIVE.to_string(),
        (false, Some(level)) if !level.trim().is_empty() => level.trim().to_string(),
        (false, _) => DEFAULT_DIRECTIVE.to_string(),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// 日誌輸出到 stderr，stdout 保留給計算結果
pub fn init_cli_logger(directive: &str) {
    // try_init: tests and repeated calls must not panic
    let _ = tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_covers_binary_target() {
        let directive = default_directive(false, None);
        assert!(directive.contains("ssp_calc=info"));
        assert!(directive.contains("ssp_calculator=info"));
        assert!(EnvFilter::try_new(&directive).is_ok());
    }

    #[test]
    fn test_verbose_overrides_configured_level() {
        let directive = default_directive(true, Some("warn"));
        assert!(directive.contains("ssp_calc=debug"));
        assert!(directive.contains("ssp_calculator=debug"));
    }

    #[test]
    fn test_configured_level_is_used() {
        assert_eq!(default_directive(false, Some(" warn ")), "warn");
        assert_eq!(default_directive(false, Some("  ")), DEFAULT_DIRECTIVE);
    }
}
