//! Chart payload → uniform series.
//!
//! The history is thinned to roughly [`TARGET_POINTS`] samples with a fixed
//! stride; the most recent valid sample is always kept so the series ends at
//! the latest close.

use crate::chart::{ChartPayload, ChartResult};
use crate::{
    CoreError, Country, IndexSeries, Instrument, PricePoint, StockInfo, Symbol, Timeframe,
    UtcDateTime,
};

pub const TARGET_POINTS: usize = 100;

/// Build the success-path entry for one catalog instrument.
pub fn normalize(
    payload: &ChartPayload,
    instrument: &Instrument,
    country: Country,
    timeframe: Timeframe,
) -> Result<IndexSeries, CoreError> {
    let result = payload
        .first_result()
        .ok_or_else(|| CoreError::no_data(instrument.symbol))?;
    let meta = &result.meta;

    let start_price = first_close(result).or_else(|| meta.previous_close());
    let end_price = meta.regular_market_price.or_else(|| meta.previous_close());
    let (change, change_percent) = price_change(start_price, end_price);

    Ok(IndexSeries {
        symbol: instrument.symbol.to_owned(),
        name: instrument.display_name.to_owned(),
        current_price: end_price,
        change,
        change_percent,
        timeframe,
        country,
        historical_data: downsample(result, TARGET_POINTS),
        currency: meta
            .currency()
            .unwrap_or(country.default_currency())
            .to_owned(),
        error: None,
    })
}

/// Snapshot of a single listing against its previous close.
pub fn stock_info(payload: &ChartPayload, symbol: &Symbol) -> Result<StockInfo, CoreError> {
    let result = payload
        .first_result()
        .ok_or_else(|| CoreError::no_data(symbol.as_str()))?;
    let meta = &result.meta;
    let current_price = meta
        .regular_market_price
        .filter(|price| price.is_finite())
        .ok_or_else(|| CoreError::no_data(symbol.as_str()))?;

    let indian_listing = symbol.as_str().contains(".NS");
    let (change, change_percent) = price_change(meta.previous_close(), Some(current_price));

    Ok(StockInfo {
        symbol: meta.symbol.clone().unwrap_or_else(|| symbol.to_string()),
        name: meta
            .short_name
            .clone()
            .or_else(|| meta.long_name.clone())
            .unwrap_or_default(),
        exchange: meta.exchange_name.clone().unwrap_or_default(),
        country: String::from(if indian_listing { "IN" } else { "US" }),
        currency: meta
            .currency()
            .unwrap_or(if indian_listing { "INR" } else { "USD" })
            .to_owned(),
        current_price,
        change,
        change_percent,
        volume: meta.regular_market_volume,
        market_cap: meta.market_cap,
    })
}

/// Absolute and percentage move from `start` to `end`.
///
/// The percentage is `None` for a zero baseline instead of NaN/Infinity.
pub fn price_change(start: Option<f64>, end: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (start, end) {
        (Some(start), Some(end)) if start.is_finite() && end.is_finite() => {
            let change = end - start;
            let percent = Some(change / start * 100.0)
                .filter(|_| start != 0.0)
                .filter(|value| value.is_finite());
            (Some(change), percent)
        }
        _ => (None, None),
    }
}

/// Every `step`-th valid sample, `step = max(1, n / target)`, plus the last
/// valid sample when the stride skipped it.
pub fn downsample(result: &ChartResult, target: usize) -> Vec<PricePoint> {
    let n = result.timestamp.len();
    let step = (n / target.max(1)).max(1);
    let mut points: Vec<PricePoint> = Vec::with_capacity(n.min(target + 1));
    let mut last_taken = None;

    for index in (0..n).step_by(step) {
        if let Some(point) = point_at(result, index) {
            if push_ordered(&mut points, point) {
                last_taken = Some(index);
            }
        }
    }

    let last_valid = (0..n)
        .rev()
        .find_map(|index| point_at(result, index).map(|point| (index, point)));
    if let Some((index, point)) = last_valid {
        if last_taken.map_or(true, |taken| taken < index) {
            push_ordered(&mut points, point);
        }
    }

    points
}

fn first_close(result: &ChartResult) -> Option<f64> {
    (0..result.closes().len()).find_map(|index| result.close_at(index))
}

fn point_at(result: &ChartResult, index: usize) -> Option<PricePoint> {
    let price = result.close_at(index)?;
    let seconds = *result.timestamp.get(index)?;
    let date = UtcDateTime::from_unix_timestamp(seconds).ok()?;
    Some(PricePoint { date, price })
}

// Drops samples that would move the series backwards in time.
fn push_ordered(points: &mut Vec<PricePoint>, point: PricePoint) -> bool {
    if points.last().is_some_and(|last| last.date > point.date) {
        return false;
    }
    points.push(point);
    true
}
