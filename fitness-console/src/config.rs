use std::{env, path::PathBuf};

use dotenv::dotenv;

const LOG_CONFIG_VAR: &str = "FITNESS_LOG_CONFIG";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// log4rs configuration file. Logging stays off when it does not exist.
    pub log_config: PathBuf,
}

impl Config {
    /// Reads the environment, including a `.env` file in the working
    /// directory if there is one.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_config = lookup(LOG_CONFIG_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned());

        Self {
            log_config: PathBuf::from(log_config),
        }
    }
}
