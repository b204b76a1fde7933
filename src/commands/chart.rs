//! CLI commands that work on a roster file without starting the server

use std::path::Path;

use crate::{cli::types::PlayerNumber, chart::Player, Position, Result};

use super::{
    full_chart::handle_full_chart, player_backups::handle_player_backups,
    roster::service_from_roster, DepthChartService, FullChartRequest, PlayerBackupsRequest,
};

/// Text (or JSON) output for the chart command
pub fn chart_output(service: &DepthChartService, as_json: bool) -> Result<String> {
    if as_json {
        Ok(serde_json::to_string_pretty(&service.snapshot()?)?)
    } else {
        Ok(handle_full_chart(service, FullChartRequest::default()))
    }
}

/// One `number<TAB>name` line per backup, in depth order
pub fn backups_output(service: &DepthChartService, position: Position, number: PlayerNumber) -> String {
    let request = PlayerBackupsRequest {
        position,
        player: Player {
            number,
            name: String::new(),
        },
    };

    handle_player_backups(service, &request)
        .iter()
        .map(|p| format!("{}\t{}\n", p.number, p.name))
        .collect()
}

/// Handle the chart command
pub fn handle_chart(roster: &Path, as_json: bool) -> Result<()> {
    let (service, summary) = service_from_roster(roster)?;

    print!("{}", chart_output(&service, as_json)?);
    if !as_json {
        println!();
    }
    eprintln!(
        "Loaded {} player(s) from {} ({} rejected)",
        summary.accepted,
        roster.display(),
        summary.rejected
    );

    Ok(())
}

/// Handle the backups command
pub fn handle_backups(roster: &Path, position: Position, number: PlayerNumber) -> Result<()> {
    let (service, _summary) = service_from_roster(roster)?;

    let output = backups_output(&service, position.clone(), number);
    if output.is_empty() {
        eprintln!("No backups for #{} at {}", number, position);
    } else {
        print!("{}", output);
    }

    Ok(())
}
