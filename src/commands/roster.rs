//! Roster files: JSON arrays of add requests applied in order.
//!
//! ```json
//! [
//!   { "position": "QB", "player": { "number": 12, "name": "Tom Brady" } },
//!   { "position": "QB", "player": { "number": 11, "name": "Blaine Gabbert" }, "positionDepth": 1 }
//! ]
//! ```

use std::{fs, path::Path};

use tracing::warn;

use crate::Result;

use super::{add_player::handle_add_player, AddPlayerRequest, DepthChartService};

/// Outcome of applying a roster file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Read and parse a roster file
pub fn load_roster(path: &Path) -> Result<Vec<AddPlayerRequest>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Apply every entry through the add handler; rejected entries are skipped.
pub fn apply_roster(service: &DepthChartService, entries: Vec<AddPlayerRequest>) -> RosterSummary {
    let mut summary = RosterSummary::default();

    for entry in entries {
        let label = format!("{} #{} {}", entry.position, entry.player.number, entry.player.name);
        if handle_add_player(service, entry) {
            summary.accepted += 1;
        } else {
            warn!("Skipped roster entry {}", label);
            summary.rejected += 1;
        }
    }

    summary
}

/// Build a service from a roster file
pub fn service_from_roster(path: &Path) -> Result<(DepthChartService, RosterSummary)> {
    let service = DepthChartService::default();
    let summary = apply_roster(&service, load_roster(path)?);
    Ok((service, summary))
}
