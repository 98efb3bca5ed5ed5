use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single point of the portfolio performance series.
///
/// The core hands an ordered (chronological) sequence of these to the
/// frontend — the chart just renders them, nothing mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// When the backend recorded this observation
    pub timestamp: DateTime<Utc>,

    /// Total portfolio value at that time
    pub total_value: f64,
}
