use tracing::Level;

/// Initialize the tracing subscriber writing compact output to stderr.
/// Stdout belongs to the alternate screen once the overlay is up, so
/// diagnostics go to stderr where a `2> shade.log` redirect can catch
/// them. Safe to call multiple times; subsequent calls are no-ops.
pub fn init_default() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
