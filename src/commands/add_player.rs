//! Add player command

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::{chart::Player, error::DepthChartError, Position};

use super::DepthChartService;

/// Request to place a player on the chart.
///
/// `position_depth` is 1-based and optional; see
/// [`DepthChartStore::add_player`](crate::chart::DepthChartStore::add_player)
/// for how out-of-range values resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerRequest {
    pub position: Position,
    pub player: Player,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_depth: Option<i32>,
}

/// Handle an add request, returning whether the player was added.
pub fn handle_add_player(service: &DepthChartService, request: AddPlayerRequest) -> bool {
    let AddPlayerRequest {
        position,
        player,
        position_depth,
    } = request;
    let number = player.number;
    let name = player.name.clone();

    match service.with_store(|store| store.add_player(&position, player, position_depth)) {
        Ok(()) => {
            info!(%position, %number, %name, ?position_depth, "Added player to depth chart");
            true
        }
        Err(err @ DepthChartError::DuplicatePlayer { .. }) => {
            error!(%position, %number, %name, "Rejected duplicate player: {}", err);
            false
        }
        Err(err @ DepthChartError::InvalidPosition { .. }) => {
            error!(%number, %name, "Cannot add player without a position: {}", err);
            false
        }
        Err(err) => {
            error!(
                %position, %number, %name,
                "Failed to add player to depth chart: {}", err
            );
            false
        }
    }
}
