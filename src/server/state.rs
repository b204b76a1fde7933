//! Application state shared across all request handlers.

use crate::commands::DepthChartService;

/// State handed to every axum handler.
///
/// Cloning is cheap: the service is a reference-counted handle to the single
/// depth chart created at startup.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub depth_chart: DepthChartService,
}

impl AppState {
    pub fn new(depth_chart: DepthChartService) -> Self {
        Self { depth_chart }
    }
}
