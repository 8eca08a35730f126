//! Team labels, allocation output, and the per-game team sheet.

use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Which of the two teams a player is on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// Team number as stored against an RSVP (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team {}", self.number())
    }
}

/// Result of one allocation run: player ids for each team.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub team_1: Vec<PlayerId>,
    pub team_2: Vec<PlayerId>,
}

impl Teams {
    /// Player ids of one team.
    pub fn members(&self, team: Team) -> &[PlayerId] {
        match team {
            Team::One => &self.team_1,
            Team::Two => &self.team_2,
        }
    }

    pub(crate) fn push(&mut self, team: Team, id: PlayerId) {
        match team {
            Team::One => self.team_1.push(id),
            Team::Two => self.team_2.push(id),
        }
    }

    /// Team a player was allocated to, if any.
    pub fn team_of(&self, id: PlayerId) -> Option<Team> {
        if self.team_1.contains(&id) {
            Some(Team::One)
        } else if self.team_2.contains(&id) {
            Some(Team::Two)
        } else {
            None
        }
    }

    /// Total number of allocated players.
    pub fn len(&self) -> usize {
        self.team_1.len() + self.team_2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_1.is_empty() && self.team_2.is_empty()
    }
}

/// Display view of a game's teams (for API responses).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSheet {
    pub team_1: Vec<Player>,
    pub team_2: Vec<Player>,
    /// Confirmed players without a team yet (teams not generated, or RSVP'd since).
    pub unassigned: Vec<Player>,
}

impl TeamSheet {
    /// Sum of skill ratings for one team.
    pub fn skill_total(&self, team: Team) -> u64 {
        let players = match team {
            Team::One => &self.team_1,
            Team::Two => &self.team_2,
        };
        players.iter().map(|p| u64::from(p.skill)).sum()
    }
}
