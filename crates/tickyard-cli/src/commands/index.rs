use serde_json::{json, Value};
use tickyard_core::{Country, MarketIndexService, Timeframe};

use crate::cli::IndexArgs;
use crate::error::CliError;

pub async fn run(args: &IndexArgs, service: &MarketIndexService) -> Result<Value, CliError> {
    let timeframe: Timeframe = args.timeframe.parse()?;
    let country = args
        .country
        .as_deref()
        .and_then(|raw| raw.parse::<Country>().ok())
        .unwrap_or_else(|| Country::infer_from_symbol(&args.symbol));

    let index = service
        .find_index(&args.symbol, country, timeframe)
        .await
        .ok_or_else(|| CliError::NotFound(format!("Index not found: {}", args.symbol)))?;

    Ok(json!({ "index": index }))
}
