// ═══════════════════════════════════════════════════════════════════
// Error Tests — DashboardError display and conversions
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::errors::DashboardError;

#[test]
fn api_error_display_carries_status() {
    let e = DashboardError::Api {
        status: 500,
        message: "internal error".into(),
    };
    assert_eq!(e.to_string(), "API error (status 500): internal error");
}

#[test]
fn network_error_display() {
    let e = DashboardError::Network("connection refused".into());
    assert_eq!(e.to_string(), "Network error: connection refused");
}

#[test]
fn validation_error_display() {
    let e = DashboardError::Validation("Quantity for AAPL must be positive".into());
    assert!(e.to_string().starts_with("Validation failed:"));
}

#[test]
fn io_error_converts_to_file_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let e: DashboardError = io.into();
    assert!(matches!(e, DashboardError::FileIO(_)));
    assert!(e.to_string().contains("denied"));
}

#[test]
fn serde_error_converts_to_deserialization() {
    let bad = serde_json::from_str::<f64>("not json").unwrap_err();
    let e: DashboardError = bad.into();
    assert!(matches!(e, DashboardError::Deserialization(_)));
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DashboardError>();
}
