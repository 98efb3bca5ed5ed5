pub mod export_service;
pub mod metrics_service;
pub mod refresh_service;
