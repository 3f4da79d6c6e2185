use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const EXPORT_FILTER: &str = "info,hyper=off,h2=off,tonic=off,opentelemetry=off,sqlx=warn";

fn file_writer(log_dir: &str, component: &str) -> (NonBlocking, WorkerGuard) {
    let file_appender = RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        format!("rust_app_{component}.log"),
    );
    non_blocking(file_appender)
}

/// Installs the global subscriber: console output, an optional JSON file sink and
/// the OpenTelemetry log bridge.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process.
pub fn init_logger(
    sdk_logger_provider: &SdkLoggerProvider,
    component: &str,
    is_dev: bool,
    enable_file: bool,
) -> Option<WorkerGuard> {
    let (file_layer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let (writer, guard) = file_writer(log_dir, component);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new(EXPORT_FILTER));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let otel_layer = OpenTelemetryTracingBridge::new(sdk_logger_provider)
        .with_filter(EnvFilter::new(EXPORT_FILTER));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(otel_layer)
        .init();

    guard
}
