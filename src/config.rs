use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::api::{MappingPolicy, holdings_api::DEFAULT_BASE_URL};

#[derive(Clone, Debug, Parser)]
#[command(name = "holdings-tracker", about = "Terminal holdings tracker with offline cache")]
pub struct Config {
    /// Endpoint serving the holdings payload
    #[arg(long, env = "HOLDINGS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// SQLite file used as the offline cache
    #[arg(long, env = "HOLDINGS_DB_PATH", default_value = "~/.holdings-tracker/holdings.db")]
    pub db_path: String,

    #[arg(long, env = "HOLDINGS_LOG_PATH", default_value = "holdings-tracker.log")]
    pub log_path: String,

    /// Upper bound for the remote call, in seconds
    #[arg(long, env = "HOLDINGS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Drop invalid records instead of failing the whole batch
    #[arg(long, env = "HOLDINGS_SKIP_INVALID")]
    pub skip_invalid: bool,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.db_path).into_owned())
    }

    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_path).into_owned())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn mapping_policy(&self) -> MappingPolicy {
        if self.skip_invalid {
            MappingPolicy::SkipInvalid
        } else {
            MappingPolicy::FailFast
        }
    }
}
