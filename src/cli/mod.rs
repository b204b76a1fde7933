//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{PlayerNumber, Position};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the depth chart over HTTP.
    Serve {
        /// Listen address, e.g. `0.0.0.0:8080` (or set `DEPTH_CHART_BIND_ADDR`).
        #[clap(long, short)]
        bind: Option<String>,
    },

    /// Build a chart from a roster file and print it.
    ///
    /// The roster is a JSON array of `{position, player, positionDepth?}` entries
    /// applied in order; rejected entries are reported and skipped.
    Chart {
        /// Path to the roster JSON file.
        #[clap(long, short)]
        roster: PathBuf,

        /// Output the chart as JSON instead of the tab-delimited table.
        #[clap(long)]
        json: bool,
    },

    /// Build a chart from a roster file and list a player's backups.
    Backups {
        /// Path to the roster JSON file.
        #[clap(long, short)]
        roster: PathBuf,

        /// Position label, e.g. `QB`.
        #[clap(long, short)]
        position: Position,

        /// Jersey number of the reference player.
        #[clap(long, short)]
        number: PlayerNumber,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-depth-chart", about = "NFL depth chart service")]
pub struct DepthChartCli {
    #[clap(subcommand)]
    pub command: Commands,
}
