pub mod client;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::sync::Arc;

use client::traits::PortfolioApi;
use models::analytics::{Alert, Progress, TopPerformer};
use models::history::HistoryPoint;
use models::holding::{Holding, NewHolding};
use models::quote::SymbolQuote;
use models::snapshot::PortfolioSnapshot;
use services::export_service::ExportService;
use services::metrics_service::{MetricsService, DEFAULT_TOP_PERFORMERS};
use storage::target_store::TargetStore;

use errors::DashboardError;

/// Main entry point for the portfolio dashboard core.
///
/// Owns the page-lifetime state (holdings snapshot, performance history,
/// target value) and the services that derive display figures from it.
/// All mutation goes through `&mut self`, so there is exactly one writer;
/// the snapshot itself lives behind an `Arc` and is swapped wholesale on
/// every successful fetch — a reader holding a clone can never observe a
/// half-updated snapshot, and when refreshes race the later response wins
/// outright.
///
/// To drive the session from the periodic pollers in
/// [`services::refresh_service`], wrap it in an `Arc<tokio::sync::Mutex>`;
/// the mutex serializes refresh triggers the same way the browser's event
/// loop did.
#[must_use]
pub struct DashboardSession {
    api: Arc<dyn PortfolioApi>,
    metrics: MetricsService,
    export: ExportService,
    snapshot: Arc<PortfolioSnapshot>,
    history: Arc<Vec<HistoryPoint>>,
    target: Option<f64>,
    target_store: Option<TargetStore>,
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("holdings", &self.snapshot.len())
            .field("history_points", &self.history.len())
            .field("target", &self.target)
            .finish()
    }
}

impl DashboardSession {
    /// Create a session with no persistence; the target lives in memory only.
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self {
            api,
            metrics: MetricsService::new(),
            export: ExportService::new(),
            snapshot: Arc::new(PortfolioSnapshot::empty()),
            history: Arc::new(Vec::new()),
            target: None,
            target_store: None,
        }
    }

    /// Create a session that persists the target through `store`.
    /// Any previously saved target is loaded immediately.
    pub fn with_target_store(
        api: Arc<dyn PortfolioApi>,
        store: TargetStore,
    ) -> Result<Self, DashboardError> {
        let target = store.load()?;
        let mut session = Self::new(api);
        session.target = target;
        session.target_store = Some(store);
        Ok(session)
    }

    // ── Refresh ─────────────────────────────────────────────────────

    /// Re-fetch all holdings and replace the snapshot wholesale.
    /// On failure the previous snapshot stays untouched.
    pub async fn refresh_holdings(&mut self) -> Result<(), DashboardError> {
        let holdings = self.api.fetch_holdings().await?;
        self.snapshot = Arc::new(PortfolioSnapshot::new(holdings));
        Ok(())
    }

    /// Re-fetch the performance history. An empty series is valid and
    /// replaces the old one; on failure the previous series stays.
    pub async fn refresh_history(&mut self) -> Result<(), DashboardError> {
        let history = self.api.fetch_history().await?;
        self.history = Arc::new(history);
        Ok(())
    }

    /// Full refresh: ask the backend to update its data, then re-fetch
    /// holdings and history.
    pub async fn refresh_all(&mut self) -> Result<(), DashboardError> {
        self.api.trigger_backend_refresh().await?;
        self.refresh_holdings().await?;
        self.refresh_history().await?;
        Ok(())
    }

    // ── State Access ────────────────────────────────────────────────

    /// Current snapshot. The `Arc` clone stays internally consistent even
    /// if the session refreshes while the caller still holds it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<PortfolioSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Performance history for the chart, oldest first.
    #[must_use]
    pub fn history(&self) -> Arc<Vec<HistoryPoint>> {
        Arc::clone(&self.history)
    }

    /// Look up one holding by symbol.
    #[must_use]
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.snapshot.get(symbol)
    }

    /// Case-insensitive filter over symbol and company name
    /// (the holdings-table search box).
    #[must_use]
    pub fn search_holdings(&self, query: &str) -> Vec<&Holding> {
        self.snapshot.search(query)
    }

    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.snapshot.len()
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Validate and register a new position with the backend.
    /// Returns the backend's confirmation message. The caller re-fetches
    /// holdings afterwards (as the add form did) to see the new row.
    pub async fn add_holding(&self, holding: NewHolding) -> Result<String, DashboardError> {
        holding.validate()?;
        self.api.add_holding(&holding).await
    }

    /// Remove one position by symbol. Returns the confirmation message.
    pub async fn remove_holding(&self, symbol: &str) -> Result<String, DashboardError> {
        self.api.remove_holding(symbol).await
    }

    /// Remove several positions sequentially. Stops at the first failure;
    /// removals already confirmed are not rolled back.
    pub async fn remove_holdings(
        &self,
        symbols: &[String],
    ) -> Result<Vec<String>, DashboardError> {
        let mut messages = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            messages.push(self.api.remove_holding(symbol).await?);
        }
        Ok(messages)
    }

    // ── Quotes ──────────────────────────────────────────────────────

    /// Fetch the latest quote for each selected symbol.
    ///
    /// Failures are isolated per symbol: a failed fetch yields a `None`
    /// quote (rendered as a "no data" card) and a warn log, while the
    /// remaining symbols are still fetched.
    pub async fn latest_quotes(&self, symbols: &[String]) -> Vec<SymbolQuote> {
        let mut quotes = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let quote = match self.api.fetch_latest_quote(symbol).await {
                Ok(q) => Some(q),
                Err(e) => {
                    log::warn!("quote fetch for {symbol} failed: {e}");
                    None
                }
            };
            quotes.push(SymbolQuote {
                symbol: symbol.to_uppercase(),
                quote,
            });
        }
        quotes
    }

    // ── Derived Metrics ─────────────────────────────────────────────

    /// Total portfolio value (missing prices count as zero).
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.metrics.current_value(&self.snapshot)
    }

    /// Best-returning holdings, at most `limit` entries.
    #[must_use]
    pub fn top_performers(&self, limit: usize) -> Vec<TopPerformer> {
        self.metrics.top_performers(&self.snapshot, limit)
    }

    /// Top performers with the card's default size (3).
    #[must_use]
    pub fn default_top_performers(&self) -> Vec<TopPerformer> {
        self.top_performers(DEFAULT_TOP_PERFORMERS)
    }

    /// Active alerts (threshold breaches, then target shortfall), capped
    /// at 3. Empty means "no active alerts".
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.metrics.evaluate_alerts(&self.snapshot, self.target)
    }

    /// Progress toward the target, or `None` when no target is set.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        self.metrics
            .progress(self.current_value(), self.target)
    }

    // ── Target ──────────────────────────────────────────────────────

    /// Set the target portfolio value. Must be positive.
    ///
    /// The new value is persisted immediately when a store is configured;
    /// a persistence failure is logged but keeps the in-memory target
    /// (matching the original dashboard, which warned and carried on).
    pub fn set_target(&mut self, target: f64) -> Result<(), DashboardError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(DashboardError::Validation(
                "Target value must be a positive number".into(),
            ));
        }
        self.target = Some(target);
        if let Some(store) = &self.target_store {
            if let Err(e) = store.save(target) {
                log::warn!("could not persist target value: {e}");
            }
        }
        Ok(())
    }

    /// Clear the target (back to the neutral progress state).
    pub fn clear_target(&mut self) -> Result<(), DashboardError> {
        self.target = None;
        if let Some(store) = &self.target_store {
            store.clear()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Serialize the current snapshot as CSV (8 fixed columns).
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.export.holdings_to_csv(&self.snapshot)
    }

    /// Download file name for today's export.
    #[must_use]
    pub fn export_file_name(&self) -> String {
        self.export
            .suggested_file_name(chrono::Utc::now().date_naive())
    }
}
