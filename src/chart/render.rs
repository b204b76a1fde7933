//! Tab-delimited rendering of the full depth chart

use std::fmt::Write;

use super::store::DepthChartStore;

/// Text returned when no position holds any player.
pub const EMPTY_CHART_MESSAGE: &str = "No results included in NFL Depth Chart";

impl DepthChartStore {
    /// Render every position as one tab-delimited row.
    ///
    /// The header has one `No.`/`Player n` column pair per depth up to the deepest
    /// position; shorter rows are not padded.
    pub fn render_full_chart(&self) -> String {
        if self.is_empty() {
            return EMPTY_CHART_MESSAGE.to_string();
        }

        let max_depth = self.chart.values().map(Vec::len).max().unwrap_or(0);

        let mut out = String::from("Position\t");
        for rank in 1..=max_depth {
            // Writing to a String never fails
            let _ = write!(out, "No.\tPlayer {}\t", rank);
        }
        out.push('\n');

        for (position, players) in &self.chart {
            let _ = write!(out, "{}\t\t", position);
            for player in players {
                let _ = write!(out, "{}\t{}\t", player.number, player.name);
            }
            out.push('\n');
        }

        out
    }
}
