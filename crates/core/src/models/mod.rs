pub mod analytics;
pub mod history;
pub mod holding;
pub mod quote;
pub mod snapshot;
