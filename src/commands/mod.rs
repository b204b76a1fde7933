//! Request handlers for the NFL depth chart service
//!
//! Every handler takes the shared [`DepthChartService`], forwards to the store
//! and turns any error into a logged default result (`false`, an empty list or
//! an empty string). Callers above this layer never see a store error.

pub mod add_player;
pub mod chart;
pub mod full_chart;
pub mod player_backups;
pub mod remove_player;
pub mod roster;
pub mod service;

pub use add_player::{handle_add_player, AddPlayerRequest};
pub use full_chart::{handle_full_chart, FullChartRequest};
pub use player_backups::{handle_player_backups, PlayerBackupsRequest};
pub use remove_player::{handle_remove_player, RemovePlayerRequest};
pub use service::DepthChartService;
