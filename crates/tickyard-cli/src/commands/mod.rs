mod index;
mod indexes;
mod stock;

use std::sync::Arc;

use serde_json::Value;
use tickyard_core::{MarketIndexService, YahooChartAdapter};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let adapter = YahooChartAdapter::default()
        .with_base_url(cli.base_url.as_str())
        .with_timeout_ms(cli.timeout_ms);
    let service = MarketIndexService::new(Arc::new(adapter));

    execute(&cli.command, &service).await
}

pub async fn execute(command: &Command, service: &MarketIndexService) -> Result<Value, CliError> {
    match command {
        Command::Indexes(args) => indexes::run(args, service).await,
        Command::Index(args) => index::run(args, service).await,
        Command::Stock(args) => stock::run(args, service).await,
    }
}
