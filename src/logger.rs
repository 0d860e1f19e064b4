// Minimal stderr backend for the `log` facade.
// Level comes from HEART_LOG (error|warn|info|debug|trace|off), default info.

use log::{LevelFilter, Log, Metadata, Record};

pub const LEVEL_VAR: &str = "HEART_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a level name; unknown or missing names fall back to info.
pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Install the logger once at startup. A second call is a no-op.
pub fn init() {
    let level = parse_level(std::env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
