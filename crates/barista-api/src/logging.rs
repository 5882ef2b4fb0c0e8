//! Tracing initialization

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stdout and a daily-rolled file under `logs/`.
///
/// The returned guard must be held for the lifetime of the process so the
/// file writer flushes on shutdown.
pub fn init_tracing_to_file() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", "barista-api.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    guard
}
