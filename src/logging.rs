use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, honouring `RUST_LOG`.
///
/// Without `RUST_LOG` the filter is `mmamath=warn`, or `mmamath=info` when
/// `verbose` is set. Logs go to stderr so JSON output on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "mmamath=info" } else { "mmamath=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // try_init so a second call is a no-op
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
