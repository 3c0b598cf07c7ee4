use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming a log file. When set, logs go there instead of stderr.
pub const LOG_FILE_ENV: &str = "ROSTER_LOG";

/// Pick the default filter directive.
///
/// `verbosity` comes from repeated `-v` flags (`info`, then `debug`). It only
/// raises the bare default level of the configured filter; per-target
/// directives and a default that is already more verbose are kept.
pub fn default_directive(config: &LoggingConfig, verbosity: u8) -> String {
    let requested = match verbosity {
        0 => return config.filter.clone(),
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    let mut has_default = false;
    let mut directives: Vec<String> = config
        .filter
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(|directive| match directive.parse::<LevelFilter>() {
            Ok(level) => {
                has_default = true;
                level.max(requested).to_string().to_lowercase()
            }
            Err(_) => directive.to_string(),
        })
        .collect();

    if !has_default {
        directives.insert(0, requested.to_string().to_lowercase());
    }
    directives.join(",")
}

/// Initialize tracing.
///
/// `RUST_LOG` wins over the configured filter. If `ROSTER_LOG` is set, log
/// lines are written to `{path}.{timestamp}.{pid}` so concurrent runs never
/// share a file.
pub fn init_tracing(config: &LoggingConfig, verbosity: u8) {
    let directive = default_directive(config, verbosity);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    if let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() {
        let pid = std::process::id();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

        let Ok(file) = std::fs::File::create(&unique_path) else {
            eprintln!("Warning: Failed to create log file: {}", unique_path);
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
        return;
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_default_level() {
        let config = LoggingConfig::default();
        assert_eq!(default_directive(&config, 0), "warn");
        assert_eq!(default_directive(&config, 1), "info");
        assert_eq!(default_directive(&config, 3), "debug");
    }

    #[test]
    fn configured_filter_used_without_flags() {
        let config = LoggingConfig {
            filter: "roster=trace".to_string(),
        };
        assert_eq!(default_directive(&config, 0), "roster=trace");
    }

    #[test]
    fn verbosity_never_lowers_configured_level() {
        let debug = LoggingConfig {
            filter: "debug".to_string(),
        };
        assert_eq!(default_directive(&debug, 1), "debug");
        assert_eq!(default_directive(&debug, 2), "debug");

        let targeted = LoggingConfig {
            filter: "roster=trace".to_string(),
        };
        assert_eq!(default_directive(&targeted, 1), "info,roster=trace");

        let mixed = LoggingConfig {
            filter: "warn, hyper=off".to_string(),
        };
        assert_eq!(default_directive(&mixed, 2), "debug,hyper=off");
    }
}
