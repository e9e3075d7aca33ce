use std::env;

use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter, fmt, Layer};

use crate::model::config::Config;
use crate::model::errors::{acc_err_unexpected, AccResult};

pub static LOG_FILE: &str = "account-sdk.log";

/// Installs the global subscriber. Does nothing when `config.logs` is off, which is what
/// applications with their own subscriber want.
pub fn init(config: &Config) -> AccResult<()> {
    if config.logs {
        let sdk_log_level = env::var("LOG_LEVEL")
            .ok()
            .and_then(|s| s.as_str().parse().ok())
            .unwrap_or(LevelFilter::DEBUG);

        let mut layers = Vec::with_capacity(2);

        layers.push(
            fmt::Layer::new()
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_ansi(false)
                .with_target(true)
                .with_writer(tracing_appender::rolling::never(&config.log_path, LOG_FILE))
                .with_filter(sdk_log_level)
                .with_filter(filter::filter_fn(|metadata| {
                    metadata.target().starts_with("account_sdk")
                }))
                .boxed(),
        );

        if config.stdout_logs {
            layers.push(
                fmt::Layer::new()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                    .with_ansi(config.colored_logs)
                    .with_target(true)
                    .with_filter(sdk_log_level)
                    .with_filter(filter::filter_fn(|metadata| {
                        metadata.target().starts_with("account_sdk")
                    }))
                    .boxed(),
            );
        }

        tracing::subscriber::set_global_default(
            tracing_subscriber::Registry::default().with(layers),
        )
        .map_err(acc_err_unexpected)?;
    }
    Ok(())
}
