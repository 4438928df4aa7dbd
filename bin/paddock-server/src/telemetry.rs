//! Structured logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `PADDOCK_LOG`; an invalid `PADDOCK_LOG` falls back
/// to `info` with a warning on stderr.
pub fn init(cfg: &Config) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match cfg.log_level.parse::<EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: PADDOCK_LOG='{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    cfg.log_level, e
                );
                EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
