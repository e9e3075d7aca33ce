use std::env;

use serde::{Deserialize, Serialize};

pub static DEFAULT_ACCOUNT_HOST: &str = "http://127.0.0.1:8080";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base url of the account service, e.g. `http://account.internal:8080`.
    pub account_host: String,

    /// Should we log at all?
    pub logs: bool,
    /// Should logs be printed to stdout?
    pub stdout_logs: bool,
    /// Should logs be colored?
    pub colored_logs: bool,
    /// Directory the log file is written into.
    pub log_path: String,
}

impl Config {
    /// Reads `ACCOUNT_SERVER_HOST` and `ACCOUNT_SDK_LOG_PATH`, logging to file only.
    pub fn from_env() -> Config {
        Config {
            account_host: Self::account_host(),
            logs: true,
            stdout_logs: false,
            colored_logs: false,
            log_path: Self::log_path(),
        }
    }

    /// No logging at all. Useful when the embedding application installs its own subscriber.
    pub fn quiet(account_host: &str) -> Config {
        Config {
            account_host: account_host.to_string(),
            logs: false,
            stdout_logs: false,
            colored_logs: false,
            log_path: Self::log_path(),
        }
    }

    pub fn account_host() -> String {
        env::var("ACCOUNT_SERVER_HOST").unwrap_or_else(|_| DEFAULT_ACCOUNT_HOST.to_string())
    }

    pub fn log_path() -> String {
        let specified_path = env::var("ACCOUNT_SDK_LOG_PATH");

        let default_path = env::var("HOME") // unix
            .or(env::var("HOMEPATH")) // windows
            .map(|home| format!("{home}/.account-sdk"));

        specified_path
            .or(default_path)
            .unwrap_or_else(|_| ".".to_string())
    }
}
