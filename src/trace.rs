//! Optional Instrumentation of the Queues.
//!
//! Enable with `--features tracing`. Without the Feature all the internal
//! Log-Macros expand to nothing and [`init_tracing`] does nothing.

/// Installs a global `tracing` Subscriber that writes to stdout.
///
/// The Filter is taken from `RUST_LOG` and falls back to `boundq=debug`.
/// Calling this more than once is fine, only the first call installs the
/// Subscriber.
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boundq=debug"));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}

/// Installs a global `tracing` Subscriber that writes to stdout.
///
/// This is a no-op, because the `tracing` Feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_tracing() {}

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! debug_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug_noop as debug;
#[cfg(not(feature = "tracing"))]
pub(crate) use trace_noop as trace;
