mod commands;
mod config;

use std::process::ExitCode;

use envconf::EnvConf;
use envconf_std::env::SystemEnv;
use tracing::{debug, error};

use crate::commands::Outcome;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::from_env_with_provider(&SystemEnv);
    let conf = EnvConf::new(SystemEnv).with_prefix(&config.prefix);

    debug!(prefix = %conf.prefix(), command = ?config.command, "Running envconf");

    let mut stdout = std::io::stdout().lock();
    match commands::run(&conf, &config.command, &mut stdout) {
        Ok(Outcome::Printed) => ExitCode::SUCCESS,
        Ok(Outcome::Missing) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "envconf failed");
            ExitCode::FAILURE
        }
    }
}
