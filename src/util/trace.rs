//! Log initialisation for the binaries.
//!
//! Without the `tracing` feature, `env_logger` prints the `log` records
//! emitted by the library. With it, a `tracing_subscriber` formatter is
//! installed instead, and `log` records are bridged into it.
//!
//! Both honour `RUST_LOG`, for example:
//! ```bash
//! RUST_LOG=parkgrid=debug parkgrid 51.4416 5.4697 0.1 0.1
//! ```

/// Initialises the logger. Calling it more than once is harmless,
/// the second initialisation is ignored.
#[cfg(not(feature = "tracing"))]
pub fn initialize_logger() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
#[cfg(feature = "tracing")]
pub fn initialize_logger() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    // Initialise tracing with subscribers and environment filter
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init();

    tracing::debug!("Tracing initialised");
}
