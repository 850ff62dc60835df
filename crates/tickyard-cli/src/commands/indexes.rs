use serde_json::{json, Value};
use tickyard_core::{Country, MarketIndexService, ResponseFormat, Timeframe};

use crate::cli::IndexesArgs;
use crate::error::CliError;

pub async fn run(args: &IndexesArgs, service: &MarketIndexService) -> Result<Value, CliError> {
    let country: Country = args.country.parse()?;
    let timeframe: Timeframe = args.timeframe.parse()?;
    let format: ResponseFormat = args.format.parse()?;

    let entries = service.indexes(country, timeframe).await;
    if entries.is_empty() {
        return Err(CliError::NotFound(String::from("No market indexes found")));
    }

    let indexes = match format {
        ResponseFormat::Full => serde_json::to_value(&entries)?,
        ResponseFormat::Simple => serde_json::to_value(
            entries.iter().map(|entry| entry.to_simple()).collect::<Vec<_>>(),
        )?,
    };

    Ok(json!({
        "country": country,
        "timeframe": timeframe,
        "indexes": indexes,
    }))
}
