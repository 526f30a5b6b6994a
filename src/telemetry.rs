//! Tracing setup for hosts embedding the engine.
//!
//! The library only emits `tracing` events; it never installs a
//! subscriber itself. Hosts that want output call `init_tracing` once at
//! startup:
//! - `LOG_LEVEL` sets the filter (default `info,flexbox_quest=debug`)
//! - `LOG_FORMAT=json` switches to structured JSON lines

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,flexbox_quest=debug";

/// Install a global fmt subscriber.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init().is_ok(),
        _ => builder.try_init().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        // Another test may have installed a subscriber first; either way the
        // second call must not panic and must report the existing one.
        let _ = init_tracing();
        assert!(!init_tracing());
    }
}
