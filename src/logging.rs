//! `env_logger` setup for the headless host

use log::LevelFilter;

/// Level used when `RUST_LOG` says nothing about a module
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the process logger. Directives in `RUST_LOG` are parsed after
/// the default level, so they override it per module.
pub fn init(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format_timestamp_millis();
    if builder.try_init().is_err() {
        log::debug!("Logger already installed; keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_selects_debug() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::info!("still logging");
    }
}
