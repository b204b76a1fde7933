//! HTTP handlers for the depth chart endpoints.
//!
//! Handlers only unwrap the request body and forward to the command layer,
//! which never fails; every endpoint answers 200.

use axum::{extract::State, Json};

use crate::{
    chart::Player,
    commands::{
        handle_add_player, handle_full_chart, handle_player_backups, handle_remove_player,
        AddPlayerRequest, FullChartRequest, PlayerBackupsRequest, RemovePlayerRequest,
    },
};

use super::state::AppState;

/// `GET /GetFullDepthChart`
pub async fn get_full_depth_chart(State(state): State<AppState>) -> String {
    handle_full_chart(&state.depth_chart, FullChartRequest::default())
}

/// `GET /GetPlayerBackupsFromDepthChart`
pub async fn get_player_backups(
    State(state): State<AppState>,
    Json(request): Json<PlayerBackupsRequest>,
) -> Json<Vec<Player>> {
    Json(handle_player_backups(&state.depth_chart, &request))
}

/// `POST /AddPlayerToDepthChart`
pub async fn add_player(
    State(state): State<AppState>,
    Json(request): Json<AddPlayerRequest>,
) -> Json<bool> {
    Json(handle_add_player(&state.depth_chart, request))
}

/// `POST /RemovePlayerFromDepthChart`
pub async fn remove_player(
    State(state): State<AppState>,
    Json(request): Json<RemovePlayerRequest>,
) -> Json<Vec<Player>> {
    Json(handle_remove_player(&state.depth_chart, &request))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
