//! JSONL trace output for the `translit_core` spans and events.
//!
//! The returned guard owns the background writer. Queued lines are written
//! when it drops, so callers hold it until they are done.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
pub use tracing_appender::non_blocking::WorkerGuard as TraceGuard;

/// Placeholder guard when the `trace` feature is off.
#[cfg(not(feature = "trace"))]
#[derive(Debug)]
pub struct TraceGuard(());

pub const TRACE_FILE: &str = "translit-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install the file subscriber. Returns `None` if tracing was already
/// initialized in this process.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (non_blocking, worker) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker);

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("translit_core=debug")),
            )
            .init();
    });
    guard
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> Option<TraceGuard> {
    None
}
