use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax and wins over
/// `RUST_LOG`. The terminal is in raw mode on the alternate screen, so
/// stderr output is only used when the user asked for it through `RUST_LOG`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Installs the global logger. Returns `false` when logging stays off.
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<bool> {
    let env = std::env::var("RUST_LOG").ok();
    if config.log_file.is_none() && env.is_none() {
        return Ok(false);
    }

    let mut builder = env_logger::Builder::new();
    match (config.env_filter, env) {
        (Some(filter), _) | (None, Some(filter)) => {
            builder.parse_filters(&filter);
        }
        (None, None) => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }

    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("can't create log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never);
    }

    builder.try_init().context("logger already initialized")?;
    log::debug!("logging initialized");
    Ok(true)
}
