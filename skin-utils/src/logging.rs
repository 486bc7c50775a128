use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Install the global subscriber. Warnings and errors are written to stderr,
/// progress lines (enabled by `verbose`) to stdout.
pub fn init(verbose: bool) {
    let level = if verbose { Level::INFO } else { Level::WARN };
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    // a subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(writer)
        .try_init();
}
