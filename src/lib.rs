//! NFL Depth Chart Library
//!
//! An in-memory depth chart for a single team: players grouped by position,
//! ordered by depth (depth 1 is the starter), with a small HTTP service and CLI
//! around it.
//!
//! ## Features
//!
//! - **Depth-aware insertion**: add a player at a 1-based depth, or append
//! - **Removal by number**: jersey number is the player's identity within a position
//! - **Backups**: every player listed below a given player
//! - **Full chart rendering**: tab-delimited table of every position
//! - **HTTP endpoints**: the four operations served with axum
//!
//! ## Quick Start
//!
//! ```rust
//! use nfl_depth_chart::{chart::{DepthChartStore, Player}, Position};
//!
//! # fn example() -> nfl_depth_chart::Result<()> {
//! let qb = Position::new("QB");
//! let mut store = DepthChartStore::new();
//! store.add_player(&qb, Player::new(12, "Tom Brady"), None)?;
//! store.add_player(&qb, Player::new(11, "Blaine Gabbert"), None)?;
//!
//! let backups = store.get_backups(&qb, &Player::new(12, "Tom Brady"))?;
//! assert_eq!(backups, vec![Player::new(11, "Blaine Gabbert")]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DEPTH_CHART_BIND_ADDR=0.0.0.0:8080
//! export DEPTH_CHART_LOG=debug
//! ```

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use cli::types::{PlayerNumber, Position};
pub use error::{DepthChartError, Result};
