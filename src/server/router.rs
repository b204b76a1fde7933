use axum::{
    routing::{get, post},
    Router,
};

use super::{
    controller::{add_player, get_full_depth_chart, get_player_backups, health, remove_player},
    state::AppState,
};

/// Prefix the depth chart routes are also served under.
pub const CONTROLLER_PREFIX: &str = "/NFLDepthChart";

fn depth_chart_routes() -> Router<AppState> {
    Router::new()
        .route("/GetFullDepthChart", get(get_full_depth_chart))
        .route("/GetPlayerBackupsFromDepthChart", get(get_player_backups))
        .route("/AddPlayerToDepthChart", post(add_player))
        .route("/RemovePlayerFromDepthChart", post(remove_player))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(depth_chart_routes())
        .nest(CONTROLLER_PREFIX, depth_chart_routes())
}
