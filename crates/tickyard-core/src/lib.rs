//! # Tickyard Core
//!
//! Market index aggregation over the Yahoo Finance chart API.
//!
//! ## Overview
//!
//! - **Instrument catalog**: fixed, ordered index lists per market
//!   (`us`, `in`, `crypto`)
//! - **Timeframe resolver**: `1d` ... `all` tokens to concrete windows
//! - **Chart source**: one upstream request per instrument, no retry
//! - **Series normalizer**: bounded, ordered price history with change figures
//! - **Market service**: concurrent fan-out with per-instrument failure
//!   isolation
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Yahoo chart adapter, prediction passthrough |
//! | [`chart`] | Raw chart payload shape |
//! | [`data_source`] | Chart source trait and request/error types |
//! | [`domain`] | Domain models (catalog, timeframe, series) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`market`] | Aggregating market index service |
//! | [`normalize`] | Payload normalization and downsampling |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickyard_core::{MarketIndexService, YahooChartAdapter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = MarketIndexService::new(Arc::new(YahooChartAdapter::default()));
//!
//!     for index in service.market_indexes("in", "1m").await? {
//!         match index.error {
//!             None => println!("{}: {:?}", index.name, index.current_price),
//!             Some(error) => println!("{}: {error}", index.name),
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Request-level problems (unknown country or timeframe) are returned as
//! [`CoreError::Validation`]. Upstream problems for one instrument never fail
//! the batch; they surface as an entry whose `error` field is set.
//!
//! ```rust
//! use tickyard_core::{CoreError, ValidationError};
//!
//! fn describe(error: &CoreError) -> &'static str {
//!     match error {
//!         CoreError::Validation(ValidationError::UnsupportedCountry { .. }) => "bad country",
//!         CoreError::Validation(_) => "bad request",
//!         CoreError::QuoteFetchFailed { .. } | CoreError::NoDataForInstrument { .. } => {
//!             "upstream"
//!         }
//!         CoreError::Serialization(_) => "internal",
//!     }
//! }
//! ```

pub mod adapters;
pub mod chart;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod market;
pub mod normalize;

pub use adapters::{
    PredictionClient, YahooChartAdapter, DEFAULT_PREDICTION_URL, DEFAULT_YAHOO_BASE_URL,
};

pub use chart::ChartPayload;

pub use data_source::{ChartRequest, ChartSource, SourceError, SourceErrorKind};

pub use domain::{
    instruments_for, round2, Country, IndexSeries, Instrument, PricePoint, ResponseFormat,
    SamplingInterval, SimpleIndex, StockInfo, Symbol, TimeWindow, Timeframe, UtcDateTime,
    FETCH_FAILED_MESSAGE,
};

pub use error::{CoreError, ValidationError};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use market::MarketIndexService;

pub use normalize::{downsample, normalize, price_change, TARGET_POINTS};
