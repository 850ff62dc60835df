use thiserror::Error;

use crate::data_source::SourceError;

/// Validation and contract errors exposed by `tickyard-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter, digit or '^': '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("unsupported country '{value}', expected one of us, in, crypto")]
    UnsupportedCountry { value: String },
    #[error("unsupported timeframe '{value}', expected one of 1d, 1w, 1m, 3m, 6m, 1y, ytd, all")]
    UnsupportedTimeframe { value: String },
    #[error("unsupported format '{value}', expected one of full, simple")]
    UnsupportedFormat { value: String },

    #[error("invalid unix timestamp: {value}")]
    InvalidTimestamp { value: i64 },
    #[error("timestamp must be RFC3339: '{value}'")]
    TimestampNotRfc3339 { value: String },
    #[error("timestamp must be UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("quote fetch failed for '{symbol}': {source}")]
    QuoteFetchFailed { symbol: String, source: SourceError },

    #[error("no chart data returned for '{symbol}'")]
    NoDataForInstrument { symbol: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    pub fn quote_fetch_failed(symbol: impl Into<String>, source: SourceError) -> Self {
        Self::QuoteFetchFailed {
            symbol: symbol.into(),
            source,
        }
    }

    pub fn no_data(symbol: impl Into<String>) -> Self {
        Self::NoDataForInstrument {
            symbol: symbol.into(),
        }
    }

    /// True for errors the aggregator absorbs into a placeholder entry.
    pub const fn is_per_instrument(&self) -> bool {
        matches!(
            self,
            Self::QuoteFetchFailed { .. } | Self::NoDataForInstrument { .. }
        )
    }
}
