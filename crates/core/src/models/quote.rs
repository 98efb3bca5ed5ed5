use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest per-symbol market data for the asset-details cards.
///
/// Every price field is optional: the backend may not have a complete
/// candle for a symbol, and a partially filled quote is still rendered
/// (missing fields show as "--").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open_price: Option<f64>,

    #[serde(default)]
    pub high_price: Option<f64>,

    #[serde(default)]
    pub low_price: Option<f64>,

    #[serde(default)]
    pub current_price: Option<f64>,

    #[serde(default)]
    pub previous_close: Option<f64>,

    /// Absolute change vs. previous close
    #[serde(default)]
    pub change_value: Option<f64>,

    /// Percentage change vs. previous close
    #[serde(default)]
    pub percent_change: Option<f64>,

    /// When the backend fetched this quote
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Result of a batch quote fetch for one symbol.
///
/// `quote: None` means the fetch for this symbol failed — the card renders
/// a "no data" placeholder while the other symbols render normally.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolQuote {
    pub symbol: String,
    pub quote: Option<Quote>,
}
