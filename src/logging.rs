//! Tracing subscriber setup

use tracing::Level;

/// Install the stderr subscriber. `WARN` by default, `DEBUG` when verbose.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // Ignore error if already set
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true)
        .with_max_level(level)
        .try_init();
}
