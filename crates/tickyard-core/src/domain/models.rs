use serde::{Deserialize, Serialize};

use crate::{Country, Instrument, Timeframe, UtcDateTime};

/// Error string carried by placeholder entries.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// One sample of a normalized price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: UtcDateTime,
    pub price: f64,
}

/// Per-instrument result of a market request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSeries {
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub timeframe: Timeframe,
    pub country: Country,
    pub historical_data: Vec<PricePoint>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IndexSeries {
    /// Error-flagged entry that keeps the catalog slot filled.
    pub fn failed(instrument: &Instrument, country: Country, timeframe: Timeframe) -> Self {
        Self {
            symbol: instrument.symbol.to_owned(),
            name: instrument.display_name.to_owned(),
            current_price: None,
            change: None,
            change_percent: None,
            timeframe,
            country,
            historical_data: Vec::new(),
            currency: country.default_currency().to_owned(),
            error: Some(FETCH_FAILED_MESSAGE.to_owned()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn matches(&self, needle: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(needle) || self.name.eq_ignore_ascii_case(needle)
    }

    pub fn to_simple(&self) -> SimpleIndex {
        SimpleIndex {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            price: self.current_price,
            change_percent: self.change_percent.map(round2),
        }
    }
}

/// Reduced view served by `format=simple`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleIndex {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub change_percent: Option<f64>,
}

/// Snapshot of a single listing built from chart metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfo {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub country: String,
    pub currency: String,
    pub current_price: f64,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
