use std::path::PathBuf;

use clap::Parser;
use stopwatch_core::DEFAULT_TICK_MS;

use crate::logging::LoggingConfig;

/// Terminal stopwatch with lap times.
#[derive(Debug, Parser)]
#[command(name = "stopwatch", version)]
pub struct Args {
    /// Nominal ticker period in milliseconds.
    #[arg(
        long,
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub tick_ms: u64,

    /// Write logs to this file. Without it, logs are off unless RUST_LOG is set.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "debug" or "stopwatch=trace".
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

impl Args {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log_filter.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["stopwatch"]).unwrap();
        assert_eq!(args.tick_ms, 10);
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_filter, None);
    }

    #[test]
    fn tick_ms_bounds() {
        assert!(Args::try_parse_from(["stopwatch", "--tick-ms", "0"]).is_err());
        assert!(Args::try_parse_from(["stopwatch", "--tick-ms", "1001"]).is_err());
        let args = Args::try_parse_from(["stopwatch", "--tick-ms", "50"]).unwrap();
        assert_eq!(args.tick_ms, 50);
    }

    #[test]
    fn logging_options_carry_over() {
        let args = Args::try_parse_from([
            "stopwatch",
            "--log-file",
            "/tmp/stopwatch.log",
            "--log-filter",
            "debug",
        ])
        .unwrap();
        let logging = args.logging();
        assert_eq!(logging.env_filter.as_deref(), Some("debug"));
        assert_eq!(logging.log_file, Some(PathBuf::from("/tmp/stopwatch.log")));
    }
}
