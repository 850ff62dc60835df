mod prediction;
mod yahoo;

pub use prediction::{PredictionClient, DEFAULT_PREDICTION_URL};
pub use yahoo::{YahooChartAdapter, DEFAULT_YAHOO_BASE_URL};
