//! Depth chart position labels.

use crate::error::DepthChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A roster position label such as `QB`, `LWR` or `KR`.
///
/// Positions are free-form: any label a team uses is a position, and labels are
/// compared exactly as given (`"QB"` and `"qb"` are different positions).
/// Ordering is lexicographic, which is the order the full chart is rendered in.
///
/// # Examples
///
/// ```rust
/// use nfl_depth_chart::Position;
///
/// let qb = Position::new("QB");
/// assert_eq!(qb.to_string(), "QB");
/// assert_eq!(qb.as_str(), "QB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub String);

impl Position {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty label, which never names a chart entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl FromStr for Position {
    type Err = DepthChartError;

    /// Parse a label from user input, rejecting blank labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(DepthChartError::InvalidPosition {
                position: s.to_string(),
            });
        }
        Ok(Self::new(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::new("QB").to_string(), "QB");
        assert_eq!(Position::from("LWR").as_str(), "LWR");
        assert!(Position::new("").is_empty());
    }

    #[test]
    fn test_position_from_str_trims_but_keeps_case() {
        assert_eq!("  qb ".parse::<Position>().unwrap(), Position::new("qb"));
        assert_ne!(Position::new("qb"), Position::new("QB"));
    }

    #[test]
    fn test_position_from_str_rejects_blank() {
        assert!("".parse::<Position>().is_err());
        match "   ".parse::<Position>() {
            Err(DepthChartError::InvalidPosition { position }) => assert_eq!(position, "   "),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_position_ordering_is_lexicographic() {
        let mut positions = vec![Position::new("WR"), Position::new("KR"), Position::new("QB")];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new("KR"), Position::new("QB"), Position::new("WR")]
        );
    }

    #[test]
    fn test_position_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Position::new("TE")).unwrap(), "\"TE\"");
        let parsed: Position = serde_json::from_str("\"RB\"").unwrap();
        assert_eq!(parsed, Position::new("RB"));
    }
}
