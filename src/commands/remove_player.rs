//! Remove player command

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{chart::Player, error::DepthChartError, Position};

use super::DepthChartService;

/// Request to take a player off the chart, matched by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovePlayerRequest {
    pub position: Position,
    pub player: Player,
}

/// Handle a remove request.
///
/// Returns the removed player, or an empty list if nothing was removed for any
/// reason.
pub fn handle_remove_player(service: &DepthChartService, request: &RemovePlayerRequest) -> Vec<Player> {
    let RemovePlayerRequest { position, player } = request;

    match service.with_store(|store| store.remove_player(position, player)) {
        Ok(removed) if removed.is_empty() => {
            debug!(%position, number = %player.number, "No player with that number to remove");
            removed
        }
        Ok(removed) => {
            info!(
                %position, number = %player.number, name = %player.name,
                "Removed player from depth chart"
            );
            removed
        }
        Err(err @ DepthChartError::PositionNotFound { .. }) => {
            error!(
                number = %player.number, name = %player.name,
                "Failed to remove player: {}", err
            );
            Vec::new()
        }
        Err(err) => {
            error!(
                %position, number = %player.number, name = %player.name,
                "Failed to remove player from depth chart: {}", err
            );
            Vec::new()
        }
    }
}
