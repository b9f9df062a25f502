//! Command-line arguments
//!
//! Each flag can also be set through its environment variable; both take
//! precedence over the TOML config file.

use clap::Parser;
use devotionals_common::config::ConfigOverrides;
use std::path::PathBuf;

/// Command-line arguments for devotionals-server
#[derive(Parser, Debug)]
#[command(name = "devotionals-server")]
#[command(about = "HTTP service for devotional entries backed by SQLite")]
#[command(version)]
pub struct Args {
    /// Host address to bind
    #[arg(long, env = "DEVOTIONALS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "DEVOTIONALS_PORT")]
    pub port: Option<u16>,

    /// SQLite database file (created if missing)
    #[arg(short, long = "database", env = "DEVOTIONALS_DB")]
    pub database: Option<PathBuf>,

    /// Milliseconds to wait on a locked database before failing
    #[arg(long, env = "DEVOTIONALS_BUSY_TIMEOUT_MS")]
    pub busy_timeout_ms: Option<u64>,

    /// TOML config file
    #[arg(short, long, env = "DEVOTIONALS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            database_path: self.database.clone(),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 5] = [
        "DEVOTIONALS_HOST",
        "DEVOTIONALS_PORT",
        "DEVOTIONALS_DB",
        "DEVOTIONALS_BUSY_TIMEOUT_MS",
        "DEVOTIONALS_CONFIG",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_flags_become_overrides() {
        clear_env();

        let args = Args::try_parse_from([
            "devotionals-server",
            "--port",
            "8080",
            "--database",
            "/tmp/devotionals.db",
        ])
        .unwrap();
        let overrides = args.overrides();

        assert_eq!(overrides.port, Some(8080));
        assert_eq!(overrides.database_path, Some(PathBuf::from("/tmp/devotionals.db")));
        assert_eq!(overrides.host, None);
        assert_eq!(overrides.busy_timeout_ms, None);
    }

    #[test]
    #[serial]
    fn test_env_vars_fill_missing_flags() {
        clear_env();
        std::env::set_var("DEVOTIONALS_PORT", "4321");
        std::env::set_var("DEVOTIONALS_BUSY_TIMEOUT_MS", "750");

        let args = Args::try_parse_from(["devotionals-server", "--port", "9000"]);
        clear_env();

        let overrides = args.unwrap().overrides();
        assert_eq!(overrides.port, Some(9000), "flag should win over env");
        assert_eq!(overrides.busy_timeout_ms, Some(750));
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        assert!(Args::try_parse_from(["devotionals-server", "--port", "99999"]).is_err());
    }
}
