//! # Domain Models
//!
//! Canonical types shared by the aggregator, the HTTP server and the CLI.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Country`] | Market key (`us`, `in`, `crypto`) owning a static catalog |
//! | [`Instrument`] | Catalog entry: chart symbol + display name |
//! | [`Timeframe`] | Lookback token (`1d` ... `all`) |
//! | [`TimeWindow`] | Resolved `period1`/`period2`/interval triple |
//! | [`PricePoint`] | One normalized `(date, price)` sample |
//! | [`IndexSeries`] | Per-instrument market response entry |
//! | [`ResponseFormat`] | `full` or `simple` listing shape |
//! | [`StockInfo`] | Single-listing snapshot |
//! | [`Symbol`] | Validated chart symbol |
//! | [`UtcDateTime`] | UTC timestamp |

mod country;
mod format;
mod models;
mod symbol;
mod timeframe;
mod timestamp;

pub use country::{instruments_for, Country, Instrument};
pub use format::ResponseFormat;
pub use models::{round2, IndexSeries, PricePoint, SimpleIndex, StockInfo, FETCH_FAILED_MESSAGE};
pub use symbol::Symbol;
pub use timeframe::{SamplingInterval, TimeWindow, Timeframe};
pub use timestamp::UtcDateTime;
