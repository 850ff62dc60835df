//! Market index and stock snapshot routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tickyard_core::{Country, CoreError, ResponseFormat, Symbol, Timeframe};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_TIMEFRAME: &str = "1m";

#[derive(Debug, Default, Deserialize)]
pub struct IndexesQuery {
    pub country: Option<String>,
    pub timeframe: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub country: Option<String>,
    pub timeframe: Option<String>,
}

pub async fn list_indexes(
    State(state): State<AppState>,
    Query(query): Query<IndexesQuery>,
) -> Result<Json<Value>, ApiError> {
    let country: Country = parse_or(query.country.as_deref(), DEFAULT_COUNTRY)?;
    let timeframe: Timeframe = parse_or(query.timeframe.as_deref(), DEFAULT_TIMEFRAME)?;
    let format: ResponseFormat = parse_or(query.format.as_deref(), ResponseFormat::Full.as_str())?;

    let entries = state.markets.indexes(country, timeframe).await;
    if entries.is_empty() {
        return Err(ApiError::NotFound(String::from("No market indexes found")));
    }

    let indexes = match format {
        ResponseFormat::Full => serde_json::to_value(&entries),
        ResponseFormat::Simple => {
            serde_json::to_value(entries.iter().map(|e| e.to_simple()).collect::<Vec<_>>())
        }
    }
    .map_err(CoreError::from)?;

    Ok(Json(json!({
        "success": true,
        "country": country,
        "timeframe": timeframe,
        "indexes": indexes,
    })))
}

pub async fn get_index(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<Value>, ApiError> {
    let timeframe: Timeframe = parse_or(query.timeframe.as_deref(), DEFAULT_TIMEFRAME)?;
    // An unrecognised market key is ignored rather than rejected.
    let country = non_blank(query.country.as_deref())
        .and_then(|raw| raw.parse::<Country>().ok())
        .unwrap_or_else(|| Country::infer_from_symbol(&symbol));

    match state.markets.find_index(&symbol, country, timeframe).await {
        Some(index) => Ok(Json(json!({ "success": true, "index": index }))),
        None => Err(ApiError::NotFound(format!("Index not found: {symbol}"))),
    }
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let symbol = Symbol::parse(&symbol).map_err(CoreError::from)?;
    let info = state.markets.stock_info(&symbol).await?;
    Ok(Json(json!({ "success": true, "data": info })))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_or<T>(value: Option<&str>, default: &str) -> Result<T, ApiError>
where
    T: std::str::FromStr<Err = tickyard_core::ValidationError>,
{
    non_blank(value)
        .unwrap_or(default)
        .parse::<T>()
        .map_err(|error| ApiError::from(CoreError::from(error)))
}
