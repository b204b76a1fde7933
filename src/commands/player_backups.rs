//! Player backups query

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{chart::Player, error::DepthChartError, Position};

use super::DepthChartService;

/// Request for every player listed below `player` at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBackupsRequest {
    pub position: Position,
    pub player: Player,
}

/// Handle a backups query; any failure yields an empty list.
pub fn handle_player_backups(service: &DepthChartService, request: &PlayerBackupsRequest) -> Vec<Player> {
    let PlayerBackupsRequest { position, player } = request;

    match service.with_store(|store| store.get_backups(position, player)) {
        Ok(backups) => {
            debug!(
                %position, number = %player.number, count = backups.len(),
                "Resolved player backups"
            );
            backups
        }
        Err(err @ DepthChartError::PositionNotFound { .. }) => {
            error!(
                number = %player.number, name = %player.name,
                "Failed to get player backups: {}", err
            );
            Vec::new()
        }
        Err(err) => {
            error!(
                %position, number = %player.number, name = %player.name,
                "Failed to get player backups from depth chart: {}", err
            );
            Vec::new()
        }
    }
}
