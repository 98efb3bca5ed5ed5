use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// One owned position in the portfolio.
///
/// `symbol` is the unique key within a snapshot. `quantity` and `buy_price`
/// are required; everything else is live data that may be absent until the
/// backend has refreshed the position at least once. Absence is a valid
/// state ("N/A" in the display layer), never a fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Human-readable company name (e.g., "Apple Inc.")
    pub company_name: String,

    /// Number of units held
    pub quantity: u32,

    /// Price per unit at acquisition
    pub buy_price: f64,

    /// Latest known market price, absent until first refresh
    #[serde(default)]
    pub current_price: Option<f64>,

    /// User-configured low-price alert level
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Absolute gain/loss for the position, supplied by the backend
    #[serde(default)]
    pub return_value: Option<f64>,

    /// Timestamp of the last price refresh
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        quantity: u32,
        buy_price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            company_name: company_name.into(),
            quantity,
            buy_price,
            current_price: None,
            threshold: None,
            return_value: None,
            last_updated: None,
        }
    }

    /// Builder-style setter for the live market price.
    #[must_use]
    pub fn with_current_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Builder-style setter for the low-price alert level.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Builder-style setter for the absolute gain/loss.
    #[must_use]
    pub fn with_return_value(mut self, return_value: f64) -> Self {
        self.return_value = Some(return_value);
        self
    }

    /// Market value of the position. A missing current price counts as zero,
    /// so an unrefreshed holding contributes nothing to the portfolio total.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.current_price.unwrap_or(0.0) * f64::from(self.quantity)
    }

    /// Acquisition cost of the position (`buy_price × quantity`).
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.buy_price * f64::from(self.quantity)
    }

    /// Check the display-validity invariant: non-empty identifiers and
    /// strictly positive quantity and buy price (threshold too, if set).
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.symbol.trim().is_empty() {
            return Err(DashboardError::Validation("Symbol must not be empty".into()));
        }
        if self.company_name.trim().is_empty() {
            return Err(DashboardError::Validation(
                "Company name must not be empty".into(),
            ));
        }
        if self.quantity == 0 {
            return Err(DashboardError::Validation(
                format!("Quantity for {} must be positive", self.symbol),
            ));
        }
        if !(self.buy_price > 0.0) || !self.buy_price.is_finite() {
            return Err(DashboardError::Validation(
                format!("Buy price for {} must be a positive number", self.symbol),
            ));
        }
        if let Some(t) = self.threshold {
            if !(t > 0.0) || !t.is_finite() {
                return Err(DashboardError::Validation(
                    format!("Threshold for {} must be a positive number", self.symbol),
                ));
            }
        }
        Ok(())
    }
}

/// Payload for adding a new position through the backend API.
///
/// Mirrors the add-stock request body: `threshold` is the only optional
/// field; the backend fills in live data on its own refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHolding {
    pub symbol: String,
    pub company_name: String,
    pub quantity: u32,
    pub buy_price: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl NewHolding {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        quantity: u32,
        buy_price: f64,
        threshold: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            company_name: company_name.into(),
            quantity,
            buy_price,
            threshold,
        }
    }

    /// Same rules as `Holding::validate`, applied before the POST is sent.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let candidate = Holding {
            symbol: self.symbol.clone(),
            company_name: self.company_name.clone(),
            quantity: self.quantity,
            buy_price: self.buy_price,
            current_price: None,
            threshold: self.threshold,
            return_value: None,
            last_updated: None,
        };
        candidate.validate()
    }
}
