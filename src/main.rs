mod api;
mod config;
mod ddns;
mod error;
mod ip;
#[cfg(test)]
mod tests;

use config::Config;
use ddns::{Ddns, RunOutcome};
use error::Result;
use log::{debug, error};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return e.exit_code();
        }
    };
    debug!("Loaded configuration: {:?}", config);

    match run(config).await {
        Ok(RunOutcome::Unchanged { ip }) => {
            debug!("Record already points at {}", ip);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Updated { ip, previous }) => {
            debug!("Replaced {:?} with {}", previous, ip);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}

async fn run(config: Config) -> Result<RunOutcome> {
    Ddns::new(config)?.run_once().await
}
