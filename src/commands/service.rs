//! Shared handle to the depth chart store used by every request handler.

use std::sync::{Arc, Mutex};

use crate::{
    chart::{DepthChart, DepthChartStore},
    error::DepthChartError,
    Result,
};

/// Cloneable handle to the one depth chart owned by the process.
///
/// Each operation holds the lock for its whole duration, so requests arriving
/// from concurrent HTTP handlers are applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct DepthChartService {
    store: Arc<Mutex<DepthChartStore>>,
}

impl DepthChartService {
    /// Wrap an existing store; the service becomes its only owner.
    pub fn new(store: DepthChartStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `op` with exclusive access to the store.
    pub fn with_store<T>(&self, op: impl FnOnce(&mut DepthChartStore) -> Result<T>) -> Result<T> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| DepthChartError::LockPoisoned)?;
        op(&mut *store)
    }

    /// Copy of the current chart, for JSON output.
    pub fn snapshot(&self) -> Result<DepthChart> {
        self.with_store(|store| Ok(store.chart().clone()))
    }
}
