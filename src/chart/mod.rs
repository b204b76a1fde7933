//! Depth chart core for the NFL depth chart service
//!
//! This module owns the in-memory chart and everything that reads or
//! changes it:
//! - `models`: Player data structure
//! - `store`: Insertion, removal and backup lookups
//! - `render`: Full chart text rendering

pub mod models;
pub mod render;
pub mod store;


pub use models::*;
pub use render::EMPTY_CHART_MESSAGE;
pub use store::{DepthChart, DepthChartStore};
