//! Diagnostic logging
//!
//! Events go to stderr so command output on stdout stays clean. `RUST_LOG`
//! overrides the level chosen here.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a run
pub fn default_directive(verbose: bool, serving: bool) -> String {
    let level = if verbose {
        Level::DEBUG
    } else if serving {
        Level::INFO
    } else {
        Level::WARN
    };
    let level = level.as_str().to_lowercase();

    if serving {
        format!("{level},wedplan={level},tower_http={level}")
    } else {
        format!("{level},wedplan={level}")
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, serving: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, serving)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(serving),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "warn,wedplan=warn");
        assert_eq!(
            default_directive(false, true),
            "info,wedplan=info,tower_http=info"
        );
        assert_eq!(default_directive(true, false), "debug,wedplan=debug");
    }

    #[test]
    fn test_init_twice() {
        init(false, false);
        init(true, false);
    }
}
