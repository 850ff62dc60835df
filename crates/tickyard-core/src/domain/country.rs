use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Catalog entry: a chart symbol and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: &'static str,
    pub display_name: &'static str,
}

const fn instrument(symbol: &'static str, display_name: &'static str) -> Instrument {
    Instrument {
        symbol,
        display_name,
    }
}

const US_INDEXES: [Instrument; 5] = [
    instrument("^GSPC", "S&P 500"),
    instrument("^DJI", "Dow Jones Industrial Average"),
    instrument("^IXIC", "NASDAQ Composite"),
    instrument("^RUT", "Russell 2000"),
    instrument("^VIX", "CBOE Volatility Index"),
];

const IN_INDEXES: [Instrument; 4] = [
    instrument("^NSEI", "NIFTY 50"),
    instrument("^BSESN", "S&P BSE SENSEX"),
    instrument("^NSEBANK", "NIFTY Bank"),
    instrument("^CNXIT", "NIFTY IT"),
];

const CRYPTO_PAIRS: [Instrument; 5] = [
    instrument("BTC-USD", "Bitcoin"),
    instrument("ETH-USD", "Ethereum"),
    instrument("BNB-USD", "BNB"),
    instrument("SOL-USD", "Solana"),
    instrument("XRP-USD", "XRP"),
];

/// Market key selecting one instrument catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Us,
    In,
    Crypto,
}

impl Country {
    pub const ALL: [Self; 3] = [Self::Us, Self::In, Self::Crypto];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::In => "in",
            Self::Crypto => "crypto",
        }
    }

    /// Ordered, compiled-in instrument list for this market.
    pub const fn instruments(self) -> &'static [Instrument] {
        match self {
            Self::Us => &US_INDEXES,
            Self::In => &IN_INDEXES,
            Self::Crypto => &CRYPTO_PAIRS,
        }
    }

    /// Currency assumed when the provider omits one.
    pub const fn default_currency(self) -> &'static str {
        match self {
            Self::In => "INR",
            Self::Us | Self::Crypto => "USD",
        }
    }

    /// Best guess of the market a symbol belongs to.
    pub fn infer_from_symbol(symbol: &str) -> Self {
        let upper = symbol.to_ascii_uppercase();
        if ["^BSE", "^CNX", "^NSE"].iter().any(|prefix| upper.contains(prefix)) {
            Self::In
        } else if upper.contains("-USD") {
            Self::Crypto
        } else {
            Self::Us
        }
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "in" => Ok(Self::In),
            "crypto" => Ok(Self::Crypto),
            _ => Err(ValidationError::UnsupportedCountry {
                value: value.to_owned(),
            }),
        }
    }
}

/// Catalog lookup by raw market key.
pub fn instruments_for(country_key: &str) -> Result<&'static [Instrument], ValidationError> {
    country_key.parse::<Country>().map(Country::instruments)
}
