//! Full depth chart query

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::DepthChartService;

/// Request for the rendered chart. Carries no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullChartRequest {}

/// Render the whole chart, or return an empty string if the store is unavailable.
pub fn handle_full_chart(service: &DepthChartService, _request: FullChartRequest) -> String {
    match service.with_store(|store| Ok(store.render_full_chart())) {
        Ok(rendered) => {
            debug!("Full depth chart:\n{}", rendered);
            rendered
        }
        Err(err) => {
            error!("Failed to handle full depth chart query: {}", err);
            String::new()
        }
    }
}
