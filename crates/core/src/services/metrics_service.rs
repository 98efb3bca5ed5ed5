use crate::models::analytics::{Alert, Progress, TopPerformer};
use crate::models::snapshot::PortfolioSnapshot;

/// Default number of entries on the top-performers card.
pub const DEFAULT_TOP_PERFORMERS: usize = 3;

/// Maximum number of alerts surfaced at once.
pub const MAX_ALERTS: usize = 3;

/// Derives display-ready figures from a snapshot and the user's target.
///
/// Pure computation — no I/O, no internal state, no error paths. Absent
/// optional fields mean "does not apply" (a holding without a price simply
/// contributes nothing), never a fault.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Total portfolio value: Σ current_price × quantity.
    ///
    /// Holdings without a current price count as zero. Returns 0.0 for an
    /// empty snapshot. Invariant to holding order.
    #[must_use]
    pub fn current_value(&self, snapshot: &PortfolioSnapshot) -> f64 {
        snapshot.iter().map(|h| h.market_value()).sum()
    }

    /// Rank holdings by absolute return, best first, at most `limit` entries.
    ///
    /// Holdings with no reported `return_value` are excluded. Ties keep the
    /// snapshot order (the sort is stable). The percentage return is left
    /// undefined (`None`) when the cost basis is zero.
    #[must_use]
    pub fn top_performers(
        &self,
        snapshot: &PortfolioSnapshot,
        limit: usize,
    ) -> Vec<TopPerformer> {
        let mut ranked: Vec<_> = snapshot
            .iter()
            .filter_map(|h| h.return_value.map(|rv| (h, rv)))
            .collect();
        ranked.sort_by(|(_, a), (_, b)| {
            b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
            .into_iter()
            .take(limit)
            .map(|(holding, return_value)| {
                let cost_basis = holding.cost_basis();
                let return_pct = if cost_basis > 0.0 {
                    Some(return_value / cost_basis * 100.0)
                } else {
                    None
                };
                TopPerformer {
                    symbol: holding.symbol.clone(),
                    return_value,
                    return_pct,
                }
            })
            .collect()
    }

    /// Evaluate active alerts: per-holding threshold breaches first, then a
    /// single target-shortfall alert, capped at [`MAX_ALERTS`].
    ///
    /// A threshold breach fires iff both threshold and current price are
    /// present and `current_price <= threshold` — equality alerts. An empty
    /// result means "no active alerts" and is the caller's cue to render
    /// the all-clear indicator.
    #[must_use]
    pub fn evaluate_alerts(
        &self,
        snapshot: &PortfolioSnapshot,
        target: Option<f64>,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for holding in snapshot {
            if let (Some(threshold), Some(current_price)) =
                (holding.threshold, holding.current_price)
            {
                if current_price <= threshold {
                    alerts.push(Alert::ThresholdBreach {
                        symbol: holding.symbol.clone(),
                        current_price,
                    });
                }
            }
        }

        if let Some(target) = target.filter(|t| *t > 0.0) {
            let current = self.current_value(snapshot);
            if current < target {
                let shortfall_pct = round_one_decimal((target - current) / target * 100.0);
                alerts.push(Alert::TargetShortfall { shortfall_pct });
            }
        }

        alerts.truncate(MAX_ALERTS);
        alerts
    }

    /// Progress toward the target value.
    ///
    /// `None` when no positive target is set — the tracker shows a neutral
    /// "set a target" state and no division happens. Percent is clamped to
    /// 100; `remaining` goes negative once the target is exceeded.
    #[must_use]
    pub fn progress(&self, current_value: f64, target: Option<f64>) -> Option<Progress> {
        let target = target.filter(|t| *t > 0.0)?;
        Some(Progress {
            percent: (current_value / target * 100.0).min(100.0),
            remaining: target - current_value,
        })
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
