use serde_json::Value;
use tickyard_core::{MarketIndexService, Symbol};

use crate::cli::StockArgs;
use crate::error::CliError;

pub async fn run(args: &StockArgs, service: &MarketIndexService) -> Result<Value, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let info = service.stock_info(&symbol).await?;
    Ok(serde_json::to_value(info)?)
}
