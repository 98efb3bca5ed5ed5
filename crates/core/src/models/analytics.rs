use serde::{Deserialize, Serialize};

/// One entry of the top-performers card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    /// Ticker symbol
    pub symbol: String,

    /// Absolute gain/loss the ranking was sorted by
    pub return_value: f64,

    /// Percentage return relative to cost basis.
    /// `None` when the cost basis is zero — an undefined percentage is
    /// signalled explicitly rather than rendered as a silent 0%.
    pub return_pct: Option<f64>,
}

/// An active alert for the alerts card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    /// A holding's market price is at or below its configured threshold.
    ThresholdBreach { symbol: String, current_price: f64 },

    /// The portfolio total trails the user's target value.
    TargetShortfall {
        /// Percentage below target, rounded to one decimal place
        shortfall_pct: f64,
    },
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alert::ThresholdBreach {
                symbol,
                current_price,
            } => write!(f, "{symbol} below threshold (${current_price})"),
            Alert::TargetShortfall { shortfall_pct } => {
                write!(f, "Portfolio {shortfall_pct}% below target")
            }
        }
    }
}

/// Progress toward the user's target portfolio value.
///
/// Only produced when a positive target is set; with no target the tracker
/// shows a neutral state instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Percent of target reached, clamped to 100
    pub percent: f64,

    /// `target − current_value`; negative once the target is exceeded
    pub remaining: f64,
}

impl Progress {
    /// The target is considered achieved once nothing remains.
    #[must_use]
    pub fn achieved(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Amount above target, once achieved.
    #[must_use]
    pub fn surplus(&self) -> Option<f64> {
        self.achieved().then(|| self.remaining.abs())
    }
}
