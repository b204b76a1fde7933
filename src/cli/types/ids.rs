//! ID types for depth chart players.

use crate::error::{DepthChartError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a player's jersey number.
///
/// The number is the player's identity within a position: membership checks,
/// removal and backup lookups all match on it, never on the name.
///
/// # Examples
///
/// ```rust
/// use nfl_depth_chart::PlayerNumber;
///
/// let number = PlayerNumber::new(12);
/// assert_eq!(number.as_u32(), 12);
/// assert_eq!(number.to_string(), "12");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerNumber(pub u32);

impl PlayerNumber {
    /// Create a new PlayerNumber from a u32 value.
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerNumber {
    type Err = DepthChartError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
