//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in rosters, RSVPs and team lists).
pub type PlayerId = Uuid;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill rating; higher is stronger.
    pub skill: u32,
    pub goalkeeper: bool,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, skill: u32, goalkeeper: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill,
            goalkeeper,
        }
    }

    /// Outfield player (not a goalkeeper).
    pub fn outfield(name: impl Into<String>, skill: u32) -> Self {
        Self::new(name, skill, false)
    }

    /// Player flagged as goalkeeper.
    pub fn keeper(name: impl Into<String>, skill: u32) -> Self {
        Self::new(name, skill, true)
    }
}
