//! Server configuration, loaded from environment variables at startup and
//! optionally overridden on the command line.

use std::time::Duration;

use clap::Parser;

/// Which of the two listing services this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Service {
    Racing,
    Sports,
}

impl Service {
    fn default_bind(self) -> &'static str {
        match self {
            Service::Racing => "localhost:9000",
            Service::Sports => "localhost:9100",
        }
    }

    fn default_database_url(self) -> &'static str {
        match self {
            Service::Racing => "sqlite://racing.db",
            Service::Sports => "sqlite://sports.db",
        }
    }
}

/// Runtime configuration for one service process.
///
/// Every field has a default so the service runs without any environment
/// set.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,

    /// Address to listen on (default: `localhost:9000` racing,
    /// `localhost:9100` sports).
    pub bind_address: String,

    /// sqlx SQLite URL. The file is created if it does not exist.
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,sqlx=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Synthetic rows seeded on first start.
    pub seed_rows: u32,

    pub max_connections: u32,

    /// Per-request deadline; the request's store call is dropped when it
    /// expires.
    pub request_timeout: Duration,
}

impl Config {
    /// Built-in defaults for `service`, ignoring the environment.
    pub fn defaults(service: Service) -> Self {
        Self {
            service,
            bind_address: service.default_bind().to_owned(),
            database_url: service.default_database_url().to_owned(),
            log_level: "info".to_owned(),
            log_json: false,
            seed_rows: paddock_store::DEFAULT_SEED_ROWS,
            max_connections: 4,
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Build [`Config`] from `PADDOCK_*` environment variables, falling back to
    /// [`Config::defaults`].
    pub fn from_env(service: Service) -> Self {
        let defaults = Self::defaults(service);
        Self {
            service,
            bind_address: env_or("PADDOCK_BIND", &defaults.bind_address),
            database_url: env_or("PADDOCK_DATABASE_URL", &defaults.database_url),
            log_level: env_or("PADDOCK_LOG", &defaults.log_level),
            log_json: std::env::var("PADDOCK_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.log_json),
            seed_rows: parse_env("PADDOCK_SEED_ROWS", defaults.seed_rows),
            max_connections: parse_env("PADDOCK_MAX_CONNECTIONS", defaults.max_connections),
            request_timeout: Duration::from_secs(parse_env(
                "PADDOCK_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )),
        }
    }

    /// Apply command-line overrides.
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(endpoint) = cli.endpoint {
            self.bind_address = endpoint;
        }
        if let Some(url) = cli.database_url {
            self.database_url = url;
        }
        if let Some(rows) = cli.seed_rows {
            self.seed_rows = rows;
        }
        self
    }
}

/// Command-line flags. Each one overrides its environment variable.
#[derive(Debug, Default, Parser)]
#[command(version, about = "paddock listing service")]
pub struct Cli {
    /// Address to listen on, e.g. `localhost:9000`.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// sqlx SQLite URL, e.g. `sqlite://racing.db`.
    #[arg(long)]
    pub database_url: Option<String>,

    /// Number of synthetic rows to seed on first start.
    #[arg(long)]
    pub seed_rows: Option<u32>,
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn services_default_to_their_own_port_and_database() {
        let racing = Config::defaults(Service::Racing);
        let sports = Config::defaults(Service::Sports);
        assert_eq!(racing.bind_address, "localhost:9000");
        assert_eq!(sports.bind_address, "localhost:9100");
        assert_ne!(racing.database_url, sports.database_url);
    }

    #[test]
    fn cli_flags_override_config() {
        let cli = Cli::try_parse_from([
            "racing-server",
            "--endpoint",
            "0.0.0.0:9999",
            "--seed-rows",
            "5",
        ])
        .unwrap();
        let cfg = Config::defaults(Service::Racing).with_cli(cli);
        assert_eq!(cfg.bind_address, "0.0.0.0:9999");
        assert_eq!(cfg.seed_rows, 5);
        assert_eq!(cfg.database_url, "sqlite://racing.db");
    }

    #[test]
    fn no_flags_change_nothing() {
        let cfg = Config::defaults(Service::Sports).with_cli(Cli::default());
        assert_eq!(cfg.bind_address, "localhost:9100");
        assert_eq!(cfg.seed_rows, 100);
    }

    #[test]
    fn service_names_are_lowercase() {
        assert_eq!(Service::Racing.to_string(), "racing");
        assert_eq!(Service::Sports.as_ref(), "sports");
    }
}
