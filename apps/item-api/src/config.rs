use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::pool::PoolConfig;
use std::path::PathBuf;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Directory served under `/static` when `STATIC_DIR` is unset
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Application-specific configuration
/// Composes shared config components from the `config` and `database` libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PoolConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PoolConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let static_dir = PathBuf::from(env_or_default("STATIC_DIR", DEFAULT_STATIC_DIR));

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            ["APP_ENV", "DATABASE_URL", "HOST", "PORT", "STATIC_DIR"],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "item-api");
                assert_eq!(config.app.version, "0.2.0");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.database.url, database::pool::DEFAULT_DATABASE_URL);
                assert_eq!(config.server.address(), "0.0.0.0:8000");
                assert!(config.static_dir.ends_with("static"));
            },
        );
    }

    #[test]
    fn test_config_from_custom_env() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("sqlite::memory:")),
                ("PORT", Some("9001")),
                ("STATIC_DIR", Some("/srv/assets")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.database.url, "sqlite::memory:");
                assert_eq!(config.server.port, 9001);
                assert_eq!(config.static_dir, PathBuf::from("/srv/assets"));
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
