//! Market index aggregation.
//!
//! One chart request per catalog instrument, issued together and joined in
//! catalog order. Per-instrument failures become placeholder entries; only
//! an unknown country or timeframe fails the whole call, and it does so
//! before any request is sent.

use std::sync::Arc;

use futures::future::join_all;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::data_source::{ChartRequest, ChartSource};
use crate::normalize::{normalize, stock_info};
use crate::{CoreError, Country, IndexSeries, Instrument, StockInfo, Symbol, TimeWindow, Timeframe};

#[derive(Clone)]
pub struct MarketIndexService {
    source: Arc<dyn ChartSource>,
}

impl MarketIndexService {
    pub fn new(source: Arc<dyn ChartSource>) -> Self {
        Self { source }
    }

    /// Resolve raw `country`/`timeframe` tokens and aggregate the market.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] with `UnsupportedCountry` or
    /// `UnsupportedTimeframe`; per-instrument failures never surface here.
    pub async fn market_indexes(
        &self,
        country_key: &str,
        timeframe_token: &str,
    ) -> Result<Vec<IndexSeries>, CoreError> {
        self.market_indexes_at(country_key, timeframe_token, OffsetDateTime::now_utc())
            .await
    }

    pub async fn market_indexes_at(
        &self,
        country_key: &str,
        timeframe_token: &str,
        now: OffsetDateTime,
    ) -> Result<Vec<IndexSeries>, CoreError> {
        let country: Country = country_key.parse()?;
        let timeframe: Timeframe = timeframe_token.parse()?;
        Ok(self.indexes_at(country, timeframe, now).await)
    }

    pub async fn indexes(&self, country: Country, timeframe: Timeframe) -> Vec<IndexSeries> {
        self.indexes_at(country, timeframe, OffsetDateTime::now_utc())
            .await
    }

    pub async fn indexes_at(
        &self,
        country: Country,
        timeframe: Timeframe,
        now: OffsetDateTime,
    ) -> Vec<IndexSeries> {
        let window = timeframe.resolve_at(now);
        let instruments = country.instruments();

        let entries = join_all(instruments.iter().map(|instrument| async move {
            match self.index_series(instrument, country, timeframe, window).await {
                Ok(series) => series,
                Err(error) => {
                    warn!(
                        symbol = instrument.symbol,
                        country = %country,
                        timeframe = %timeframe,
                        error = %error,
                        "instrument fetch failed; returning placeholder"
                    );
                    IndexSeries::failed(instrument, country, timeframe)
                }
            }
        }))
        .await;

        let failed = entries.iter().filter(|entry| entry.is_error()).count();
        info!(
            country = %country,
            timeframe = %timeframe,
            instruments = entries.len(),
            failed,
            "market indexes aggregated"
        );

        entries
    }

    /// Look up one catalog entry by symbol or display name.
    pub async fn find_index(
        &self,
        needle: &str,
        country: Country,
        timeframe: Timeframe,
    ) -> Option<IndexSeries> {
        self.indexes(country, timeframe)
            .await
            .into_iter()
            .find(|entry| entry.matches(needle.trim()))
    }

    pub async fn stock_info(&self, symbol: &Symbol) -> Result<StockInfo, CoreError> {
        let payload = self
            .source
            .chart(ChartRequest::latest(symbol.clone()))
            .await
            .map_err(|source| CoreError::quote_fetch_failed(symbol.as_str(), source))?;
        stock_info(&payload, symbol)
    }

    async fn index_series(
        &self,
        instrument: &Instrument,
        country: Country,
        timeframe: Timeframe,
        window: TimeWindow,
    ) -> Result<IndexSeries, CoreError> {
        let symbol = Symbol::parse(instrument.symbol)?;
        debug!(
            symbol = %symbol,
            period1 = window.period1,
            period2 = window.period2,
            interval = %window.interval,
            "fetching instrument"
        );

        let payload = self
            .source
            .chart(ChartRequest::new(symbol, window))
            .await
            .map_err(|source| CoreError::quote_fetch_failed(instrument.symbol, source))?;

        normalize(&payload, instrument, country, timeframe)
    }
}
