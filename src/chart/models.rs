//! Data models for the depth chart

use crate::cli::types::PlayerNumber;
use serde::{Deserialize, Serialize};

/// A player listed on the depth chart.
///
/// `number` is the identity used for every lookup; `name` is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub number: PlayerNumber,
    pub name: String,
}

impl Player {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            number: PlayerNumber::new(number),
            name: name.into(),
        }
    }
}
