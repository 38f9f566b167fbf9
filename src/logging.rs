//! Shared fern/log initialization for the command-line tools.

use log::LevelFilter;

/// Installs a stderr logger.
///
/// The level comes from `RUST_LOG` when set to a valid filter name and
/// defaults to `warn`, so convergence advisories are visible without
/// drowning the tables.
pub fn init_logging() -> Result<(), fern::InitError> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
