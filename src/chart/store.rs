//! In-memory depth chart store and its mutation/lookup operations

use std::collections::BTreeMap;

use super::models::Player;
use crate::cli::types::Position;
use crate::error::{DepthChartError, Result};

/// Position label to players in depth order (index 0 is the starter).
pub type DepthChart = BTreeMap<Position, Vec<Player>>;

/// Owner of a single team's depth chart.
///
/// All operations take the position explicitly. Depths exposed to callers are
/// 1-based; the backing vectors are 0-based.
#[derive(Debug, Default, Clone)]
pub struct DepthChartStore {
    pub(crate) chart: DepthChart,
}

impl DepthChartStore {
    /// Create an empty depth chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player to a position, optionally at a 1-based depth.
    ///
    /// A missing, non-positive or out-of-range depth appends the player. A depth
    /// equal to the current player count also appends rather than inserting in
    /// front of the last player; the one exception is depth 1, which always makes
    /// the player the starter.
    pub fn add_player(
        &mut self,
        position: &Position,
        player: Player,
        position_depth: Option<i32>,
    ) -> Result<()> {
        if position.is_empty() {
            return Err(DepthChartError::InvalidPosition {
                position: position.to_string(),
            });
        }

        let Some(players) = self.chart.get_mut(position) else {
            self.chart.insert(position.clone(), vec![player]);
            return Ok(());
        };

        if players.iter().any(|p| p.number == player.number) {
            return Err(DepthChartError::DuplicatePlayer {
                number: player.number,
                name: player.name,
                position: position.clone(),
            });
        }

        match insertion_index(position_depth, players.len()) {
            Some(index) => players.insert(index, player),
            None => players.push(player),
        }

        Ok(())
    }

    /// Remove a player from a position, matched by number.
    ///
    /// Returns the removed player, or an empty list when no player at the
    /// position has that number.
    pub fn remove_player(&mut self, position: &Position, player: &Player) -> Result<Vec<Player>> {
        let players = self.players_mut(position)?;

        match players.iter().position(|p| p.number == player.number) {
            Some(index) => Ok(vec![players.remove(index)]),
            None => Ok(Vec::new()),
        }
    }

    /// All players listed below `player` at `position`, in depth order.
    pub fn get_backups(&self, position: &Position, player: &Player) -> Result<Vec<Player>> {
        let players = self.players(position).ok_or_else(|| not_found(position))?;

        Ok(players
            .iter()
            .position(|p| p.number == player.number)
            .map(|index| players[index + 1..].to_vec())
            .unwrap_or_default())
    }

    /// Players at a position in depth order, if the position has ever been added.
    pub fn players(&self, position: &Position) -> Option<&[Player]> {
        if position.is_empty() {
            return None;
        }
        self.chart.get(position).map(Vec::as_slice)
    }

    /// Positions currently present in the chart
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.chart.keys()
    }

    /// Total number of players across every position
    pub fn len(&self) -> usize {
        self.chart.values().map(Vec::len).sum()
    }

    /// True when no position holds any player
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the whole chart
    pub fn chart(&self) -> &DepthChart {
        &self.chart
    }

    fn players_mut(&mut self, position: &Position) -> Result<&mut Vec<Player>> {
        if position.is_empty() {
            return Err(not_found(position));
        }
        self.chart
            .get_mut(position)
            .ok_or_else(|| not_found(position))
    }
}

/// Zero-based insertion index for a requested depth, or `None` to append.
fn insertion_index(position_depth: Option<i32>, count: usize) -> Option<usize> {
    let depth = usize::try_from(position_depth?).ok()?;
    match depth {
        0 => None,
        1 => Some(0),
        d if d >= count => None,
        d => Some(d - 1),
    }
}

fn not_found(position: &Position) -> DepthChartError {
    DepthChartError::PositionNotFound {
        position: position.clone(),
    }
}
