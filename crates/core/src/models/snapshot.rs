use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// The full in-memory holdings collection at a point in time.
///
/// A snapshot is built once from a single fetch response and replaced
/// wholesale on the next successful fetch — it is never patched in place,
/// so every derived computation (value, ranking, alerts, progress) sees an
/// internally consistent view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    holdings: Vec<Holding>,
}

impl PortfolioSnapshot {
    /// Build a snapshot from a fetch response.
    ///
    /// Upholds the symbol-uniqueness invariant: if the backend ever returns
    /// duplicate symbols, the first occurrence wins and the rest are dropped.
    #[must_use]
    pub fn new(holdings: Vec<Holding>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let holdings = holdings
            .into_iter()
            .filter(|h| seen.insert(h.symbol.clone()))
            .collect();
        Self { holdings }
    }

    /// Empty snapshot, used before the first fetch completes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a holding by symbol (case-insensitive).
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        let upper = symbol.to_uppercase();
        self.holdings.iter().find(|h| h.symbol == upper)
    }

    /// Holdings in the order the backend returned them.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holding> {
        self.holdings.iter()
    }

    /// All symbols in snapshot order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.holdings.iter().map(|h| h.symbol.clone()).collect()
    }

    /// Case-insensitive substring search over symbol and company name,
    /// used by the holdings-table filter box.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Holding> {
        let q = query.to_lowercase();
        self.holdings
            .iter()
            .filter(|h| {
                h.symbol.to_lowercase().contains(&q)
                    || h.company_name.to_lowercase().contains(&q)
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl<'a> IntoIterator for &'a PortfolioSnapshot {
    type Item = &'a Holding;
    type IntoIter = std::slice::Iter<'a, Holding>;

    fn into_iter(self) -> Self::IntoIter {
        self.holdings.iter()
    }
}
