//! pricegrid binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;

use tracing_appender::non_blocking::WorkerGuard;

use clap::Parser;

use pricegrid::args::{self, Args};
use pricegrid::theme::{load_settings, logs_dir};

struct PricegridTimer;

impl tracing_subscriber::fmt::time::FormatTime for PricegridTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

/// What: Build the env filter, preferring `RUST_LOG` over the CLI level.
fn env_filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
}

/// What: Initialize tracing, writing to `~/.config/pricegrid/logs/pricegrid.log`.
///
/// Output:
/// - The appender guard when logging to the file; buffered lines are flushed when it drops.
///
/// Details:
/// - Falls back to stderr when the log file cannot be opened.
/// - `--print` mode always logs to the file so stdout stays clean for the table.
fn init_logging(level: &str) -> Option<WorkerGuard> {
    let mut log_path = logs_dir();
    log_path.push("pricegrid.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(PricegridTimer)
                .init();
            tracing::info!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(PricegridTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Args::parse();
    let _log_guard = init_logging(&args::determine_log_level(&cli));

    let settings = args::apply_overrides(&cli, load_settings(cli.config.as_deref()));
    tracing::info!(
        endpoint = %settings.catalog_endpoint,
        print = cli.print,
        "pricegrid starting"
    );

    if cli.print {
        let code = args::print::run_print(&settings).await;
        tracing::info!(code, "pricegrid exited");
        return ExitCode::from(u8::try_from(code).unwrap_or(1));
    }

    if let Err(err) = pricegrid::app::run(settings).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("pricegrid exited");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a `YYYY-MM-DD-T HH:MM:SS` stamp
    #[test]
    fn pricegrid_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::PricegridTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }

    /// What: Lines logged just before exit reach the file once the guard drops
    ///
    /// - Input: One event through a non-blocking file writer, then the guard is dropped
    /// - Output: Log file contains the event
    #[test]
    fn dropping_log_guard_flushes_pending_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pricegrid.log");
        let file = std::fs::File::create(&path).expect("create log");
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .with_timer(super::PricegridTimer)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(code = 1, "pricegrid exited");
        });
        drop(guard);
        let logged = std::fs::read_to_string(&path).expect("read log");
        assert!(logged.contains("pricegrid exited"));
    }
}
