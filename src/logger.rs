use log::{LevelFilter, SetLoggerError, info};
use std::{io::Write, sync::LazyLock, time::Instant};

/// Set when the logger is initialized; log lines are stamped relative to it.
pub static INIT_INSTANT: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Initializes the logger, writing to stderr so log lines never interleave
/// with menu output on stdout.
///
/// If `RUST_LOG` is set it takes precedence, otherwise every crate except
/// `mfun` is silenced and `mfun` logs at `filter`.
///
/// # Errors
///
/// Fails if a logger has already been installed.
pub fn init_logger(filter: LevelFilter) -> Result<(), SetLoggerError> {
    let now = *LazyLock::force(&INIT_INSTANT);

    let env = std::env::var("RUST_LOG").ok();
    let filters = env.clone().unwrap_or_else(|| format!("off,mfun={filter}"));

    env_logger::Builder::new()
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => "E",
                log::Level::Warn => "W",
                log::Level::Info => "I",
                log::Level::Debug => "D",
                log::Level::Trace => "T",
            };
            writeln!(
                buf,
                "| {} | {:>9.3}s | {: >28} @ {: <4} | {}",
                level,
                now.elapsed().as_secs_f64(),
                record.file().unwrap_or("???"),
                record.line().unwrap_or(0),
                record.args(),
            )
        })
        .target(env_logger::Target::Stderr)
        .parse_filters(&filters)
        .try_init()?;

    match env {
        Some(e) => info!("Log Level (RUST_LOG) ... {e}"),
        None => info!("Log Level (config) ... {filter}"),
    }

    Ok(())
}
