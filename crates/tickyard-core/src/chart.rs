//! Raw payload shape of the v8 chart endpoint.
//!
//! Only the fields the normalizer reads are modeled. `chart` and each
//! result's `indicators` are required; everything else may be absent.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartPayload {
    pub chart: ChartEnvelope,
}

impl ChartPayload {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn results(&self) -> &[ChartResult] {
        self.chart.result.as_deref().unwrap_or_default()
    }

    pub fn first_result(&self) -> Option<&ChartResult> {
        self.results().first()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartEnvelope {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartApiError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartApiError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl std::fmt::Display for ChartApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => write!(f, "{code}: {description}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(description)) => f.write_str(description),
            (None, None) => f.write_str("unknown chart error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

impl ChartResult {
    /// Close prices aligned with `timestamp`; nulls mark missing samples.
    pub fn closes(&self) -> &[Option<f64>] {
        self.indicators
            .quote
            .first()
            .map(|quote| quote.close.as_slice())
            .unwrap_or_default()
    }

    /// Close at a timestamp index, treating non-finite values as missing.
    pub fn close_at(&self, index: usize) -> Option<f64> {
        self.closes()
            .get(index)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub currency: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub exchange_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub market_cap: Option<f64>,
}

impl ChartMeta {
    /// Previous close, preferring the session field over the range baseline.
    pub fn previous_close(&self) -> Option<f64> {
        self.previous_close.or(self.chart_previous_close)
    }

    pub fn currency(&self) -> Option<&str> {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|currency| !currency.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}
