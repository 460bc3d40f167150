//! Log sink setup
//!
//! Events are emitted with `tracing`. Off Android they go to a
//! `tracing-subscriber` fmt layer on stderr. On Android stderr is thrown
//! away, so `android_logger` is installed as the `log` backend instead and
//! `tracing`'s `log` feature forwards events to logcat.

use std::sync::Once;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TESTCPP_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "warn";

#[cfg(target_os = "android")]
const ANDROID_TAG: &str = "testcpp";

static INIT: Once = Once::new();

/// Install the log sink once per process. Later calls are no-ops.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(not(target_os = "android"))]
fn install() {
    // The host may already own the global subscriber; keep theirs.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

#[cfg(target_os = "android")]
fn install() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(ANDROID_TAG)
            .with_max_level(android_level()),
    );
}

#[cfg(not(target_os = "android"))]
fn env_filter() -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// logcat has a single max level, so per-target directives collapse to
/// the most verbose level they name.
#[cfg(target_os = "android")]
fn android_level() -> log::LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| directive_level(&v))
        .unwrap_or(log::LevelFilter::Warn)
}

/// Most verbose level named in an `EnvFilter`-style directive such as
/// `warn,testcpp=debug`.
#[cfg(any(target_os = "android", test))]
fn directive_level(directive: &str) -> Option<log::LevelFilter> {
    directive
        .split(',')
        .filter_map(|part| part.rsplit('=').next())
        .filter_map(|level| level.trim().parse::<log::LevelFilter>().ok())
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(init);
            }
        });
        assert!(INIT.is_completed());
    }

    #[test]
    fn test_directive_level() {
        use log::LevelFilter;

        assert_eq!(directive_level("info"), Some(LevelFilter::Info));
        assert_eq!(directive_level("testcpp=debug"), Some(LevelFilter::Debug));
        assert_eq!(
            directive_level("warn, testcpp=trace ,jni=error"),
            Some(LevelFilter::Trace)
        );
        assert_eq!(directive_level("off"), Some(LevelFilter::Off));
        assert_eq!(directive_level(DEFAULT_DIRECTIVE), Some(LevelFilter::Warn));
        assert_eq!(directive_level("testcpp"), None);
        assert_eq!(directive_level(""), None);
    }

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_default_directive_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }
}
