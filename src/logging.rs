//! Logging setup
//!
//! Logs go to stderr by default so they don't interleave with the console
//! transcript. Set `AGENT_LOG_DIR` to also write daily-rolled log files; the
//! returned guard must stay alive for the process lifetime or buffered file
//! output is lost.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
pub fn init_logging() -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("license_agent=info"));

    if let Ok(dir) = std::env::var("AGENT_LOG_DIR") {
        let appender = tracing_appender::rolling::daily(dir, "license-agent.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();

        Ok(Some(guard))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();

        Ok(None)
    }
}
