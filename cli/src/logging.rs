use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "BIDIPATH_LOG";

/// Initialize structured logging on stderr.
///
/// `BIDIPATH_LOG` takes precedence over the command line; without either,
/// `--verbose` enables debug output and otherwise only warnings are shown.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level.to_string(),
        (true, None) => "debug".to_string(),
        (false, None) => "warn".to_string(),
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if level.contains('=') {
            level
        } else {
            format!("bidipath={level},bidipath_core={level}")
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
