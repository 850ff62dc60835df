//! CLI argument definitions for tickyard.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `indexes` | Every catalog instrument of one market |
//! | `index` | One catalog entry by symbol or display name |
//! | `stock` | Snapshot of a single listing |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | Yahoo | Chart API base URL |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! tickyard indexes --country in --timeframe 1m
//! tickyard indexes --format simple --pretty
//! tickyard index "nifty bank" --timeframe ytd
//! tickyard stock RELIANCE.NS
//! ```

use clap::{Args, Parser, Subcommand};
use tickyard_core::DEFAULT_YAHOO_BASE_URL;

/// Market index snapshots from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "tickyard",
    author,
    version,
    about = "Market index snapshots with bounded price history"
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Chart API base URL.
    #[arg(long, global = true, default_value = DEFAULT_YAHOO_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every instrument of a market with price history.
    ///
    /// # Examples
    ///
    ///   tickyard indexes
    ///   tickyard indexes --country crypto --timeframe 1w --format simple
    Indexes(IndexesArgs),

    /// Show one catalog entry, looked up by symbol or display name.
    ///
    /// The market is inferred from the symbol unless `--country` is given.
    ///
    /// # Examples
    ///
    ///   tickyard index ^NSEI
    ///   tickyard index bitcoin --country crypto
    Index(IndexArgs),

    /// Snapshot of a single listing against its previous close.
    Stock(StockArgs),
}

#[derive(Debug, Args)]
pub struct IndexesArgs {
    /// Market key: us, in or crypto.
    #[arg(long, default_value = "us")]
    pub country: String,

    /// Lookback: 1d, 1w, 1m, 3m, 6m, 1y, ytd or all.
    #[arg(long, default_value = "1m")]
    pub timeframe: String,

    /// Listing shape: full or simple.
    #[arg(long, default_value = "full")]
    pub format: String,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Catalog symbol or display name.
    pub symbol: String,

    #[arg(long, default_value = "1m")]
    pub timeframe: String,

    /// Market key; inferred from the symbol when omitted.
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Args)]
pub struct StockArgs {
    pub symbol: String,
}
