//! Daemon configuration
//!
//! Defaults overridden by `JOBBOARD_*` environment variables, e.g.
//!
//! ```text
//! JOBBOARD_DB_PATH=~/jobboard/JBApp.db JOBBOARD_PORT=8080 ./jobboard-server
//! ```

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const DEFAULT_DB_PATH: &str = "./JBApp.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 7000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix("JOBBOARD"))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT as i64)?
            .set_default("max_connections", DEFAULT_MAX_CONNECTIONS as i64)?
            .set_default("log_format", "pretty")?
            .add_source(env.try_parsing(true))
            .build()?;

        let mut s: Settings = conf.try_deserialize()?;
        s.db_path = shellexpand::tilde(&s.db_path).into_owned();
        Ok(s)
    }
}
