use std::path::{Path, PathBuf};

use crate::errors::DashboardError;

/// File-backed persistence for the user's target portfolio value.
///
/// A single positive decimal, written as a JSON number. The target outlives
/// the session: it is loaded once at startup and rewritten immediately on
/// every change.
#[derive(Debug, Clone)]
pub struct TargetStore {
    path: PathBuf,
}

impl TargetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted target.
    ///
    /// A missing file means no target was ever set. A corrupt or
    /// non-positive value is logged and treated the same way — a broken
    /// store must not keep the dashboard from starting.
    pub fn load(&self) -> Result<Option<f64>, DashboardError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<f64>(&contents) {
            Ok(value) if value.is_finite() && value > 0.0 => Ok(Some(value)),
            Ok(value) => {
                log::warn!("ignoring persisted target {value}: not a positive number");
                Ok(None)
            }
            Err(e) => {
                log::warn!("ignoring unreadable persisted target: {e}");
                Ok(None)
            }
        }
    }

    /// Persist a new target value, replacing any previous one.
    pub fn save(&self, target: f64) -> Result<(), DashboardError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(DashboardError::Validation(
                "Target value must be a positive number".into(),
            ));
        }
        let json = serde_json::to_string(&target)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the persisted target, if any.
    pub fn clear(&self) -> Result<(), DashboardError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
