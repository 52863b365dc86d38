//! Platform-aware logging initialization.
//!
//! Web builds route `tracing` events to the browser console and desktop
//! builds to stderr, both filtered at the configured level. Builds with
//! neither platform feature (unit tests) install no subscriber.

use std::sync::Once;

static INIT: Once = Once::new();

/// Local-storage key that overrides the configured level on web builds.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
const LEVEL_OVERRIDE_KEY: &str = "skillsyncer_log_level";

/// Initialize logging once; later calls are no-ops.
pub fn init(configured_level: &str) {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging(configured_level);
        #[cfg(all(feature = "desktop", not(feature = "web")))]
        init_desktop_logging(configured_level);
        #[cfg(not(any(feature = "web", feature = "desktop")))]
        let _ = configured_level;
    });
}

#[cfg(feature = "web")]
fn init_web_logging(configured_level: &str) {
    console_error_panic_hook::set_once();
    use tracing_subscriber::{filter::LevelFilter, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let level = stored_level()
        .or_else(|| parse_level(configured_level))
        .unwrap_or(LevelFilter::WARN);

    if tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
fn init_desktop_logging(configured_level: &str) {
    use tracing_subscriber::{filter::LevelFilter, prelude::*};

    let level = parse_level(configured_level).unwrap_or(LevelFilter::WARN);

    // Installed before launch so the desktop launcher's own logger defers to it.
    if tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(feature = "web")]
fn stored_level() -> Option<tracing::level_filters::LevelFilter> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let level = storage.get_item(LEVEL_OVERRIDE_KEY).ok()??;
    parse_level(&level)
}

#[cfg_attr(not(any(feature = "web", feature = "desktop")), allow(dead_code))]
fn parse_level(level: &str) -> Option<tracing::level_filters::LevelFilter> {
    use tracing::level_filters::LevelFilter;

    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
