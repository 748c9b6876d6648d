use tracing::Level;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// Log lines go to stderr so they never interleave with the console menus on stdout.
pub fn setup_tracing(level: Level, config: &Configuration) -> LibraryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let res = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(
        format!("failed to install tracing subscriber: {}", err).as_str(), None))
}
