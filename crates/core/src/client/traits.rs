use async_trait::async_trait;

use crate::errors::DashboardError;
use crate::models::history::HistoryPoint;
use crate::models::holding::{Holding, NewHolding};
use crate::models::quote::Quote;

/// Trait abstraction for the dashboard's backend API.
///
/// The session only ever talks to the backend through this seam, so tests
/// run against an in-memory mock and a backend swap touches exactly one
/// implementation.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetch every holding. The response replaces the snapshot wholesale.
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, DashboardError>;

    /// Fetch the portfolio value history, oldest first.
    /// An empty series is a valid result, distinct from failure.
    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, DashboardError>;

    /// Register a new position. Returns the backend's confirmation message.
    async fn add_holding(&self, holding: &NewHolding) -> Result<String, DashboardError>;

    /// Remove a position by symbol. Returns the backend's confirmation message.
    async fn remove_holding(&self, symbol: &str) -> Result<String, DashboardError>;

    /// Fetch the latest market quote for one symbol.
    async fn fetch_latest_quote(&self, symbol: &str) -> Result<Quote, DashboardError>;

    /// Ask the backend to refresh its own holdings and history data.
    /// Awaited before re-fetching so the next fetch sees fresh values.
    async fn trigger_backend_refresh(&self) -> Result<(), DashboardError>;
}
