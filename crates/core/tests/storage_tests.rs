// ═══════════════════════════════════════════════════════════════════
// Storage Tests — TargetStore persistence
// ═══════════════════════════════════════════════════════════════════

use std::sync::Arc;

use portfolio_dashboard_core::errors::DashboardError;
use portfolio_dashboard_core::storage::target_store::TargetStore;

fn temp_store() -> (tempfile::TempDir, TargetStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = TargetStore::new(dir.path().join("target.json"));
    (dir, store)
}

mod target_store {
    use super::*;

    #[test]
    fn load_missing_file_is_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        store.save(5000.0).unwrap();
        assert_eq!(store.load().unwrap(), Some(5000.0));
    }

    #[test]
    fn save_overwrites_previous_value() {
        let (_dir, store) = temp_store();
        store.save(5000.0).unwrap();
        store.save(7500.5).unwrap();
        assert_eq!(store.load().unwrap(), Some(7500.5));
    }

    #[test]
    fn save_rejects_non_positive_values() {
        let (_dir, store) = temp_store();
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = store.save(bad).unwrap_err();
            assert!(
                matches!(err, DashboardError::Validation(_)),
                "{bad} should be rejected"
            );
        }
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_contents_load_as_none() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "not a number").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn persisted_non_positive_value_loads_as_none() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "-42.0").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_removes_persisted_target() {
        let (_dir, store) = temp_store();
        store.save(5000.0).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_without_file_is_ok() {
        let (_dir, store) = temp_store();
        assert!(store.clear().is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Session integration with the store
// ═══════════════════════════════════════════════════════════════════

mod session_persistence {
    use super::*;
    use async_trait::async_trait;
    use portfolio_dashboard_core::client::traits::PortfolioApi;
    use portfolio_dashboard_core::models::history::HistoryPoint;
    use portfolio_dashboard_core::models::holding::{Holding, NewHolding};
    use portfolio_dashboard_core::models::quote::Quote;
    use portfolio_dashboard_core::DashboardSession;

    /// Backend stub — persistence tests never touch the network.
    struct NullApi;

    #[async_trait]
    impl PortfolioApi for NullApi {
        async fn fetch_holdings(&self) -> Result<Vec<Holding>, DashboardError> {
            Ok(Vec::new())
        }
        async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, DashboardError> {
            Ok(Vec::new())
        }
        async fn add_holding(&self, _: &NewHolding) -> Result<String, DashboardError> {
            Ok(String::new())
        }
        async fn remove_holding(&self, _: &str) -> Result<String, DashboardError> {
            Ok(String::new())
        }
        async fn fetch_latest_quote(&self, _: &str) -> Result<Quote, DashboardError> {
            Ok(Quote::default())
        }
        async fn trigger_backend_refresh(&self) -> Result<(), DashboardError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn target_survives_across_sessions() {
        let (_dir, store) = temp_store();

        let mut first =
            DashboardSession::with_target_store(Arc::new(NullApi), store.clone()).unwrap();
        assert_eq!(first.target(), None);
        first.set_target(5000.0).unwrap();

        // a brand new session picks the target up from disk
        let second = DashboardSession::with_target_store(Arc::new(NullApi), store).unwrap();
        assert_eq!(second.target(), Some(5000.0));
    }

    #[tokio::test]
    async fn cleared_target_stays_cleared() {
        let (_dir, store) = temp_store();

        let mut session =
            DashboardSession::with_target_store(Arc::new(NullApi), store.clone()).unwrap();
        session.set_target(5000.0).unwrap();
        session.clear_target().unwrap();

        let next = DashboardSession::with_target_store(Arc::new(NullApi), store).unwrap();
        assert_eq!(next.target(), None);
    }
}
