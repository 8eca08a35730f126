//! Roster: the confirmed players of one game, ordered by skill.

use crate::models::player::Player;
use std::collections::HashSet;

/// Why a roster cannot be split into two teams.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Nobody confirmed for the game.
    EmptyRoster,
    /// Two equal teams need an even number of players.
    OddRoster { count: usize },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyRoster => {
                write!(f, "The number of confirmed players must be greater than zero")
            }
            RosterError::OddRoster { count } => write!(
                f,
                "The number of confirmed players must be even ({} confirmed)",
                count
            ),
        }
    }
}

impl std::error::Error for RosterError {}

/// Players of one game sorted ascending by skill (stable: equal skills keep input order).
///
/// Each player id appears once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster, sorting by skill. Repeated ids keep only their first entry.
    pub fn new(mut players: Vec<Player>) -> Self {
        let mut seen = HashSet::new();
        players.retain(|p| seen.insert(p.id));
        players.sort_by_key(|p| p.skill);
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn goalkeeper_count(&self) -> usize {
        self.players.iter().filter(|p| p.goalkeeper).count()
    }
}

/// A roster that passed validation: non-empty and of even size.
///
/// Only [`crate::validate`] constructs one, so the allocator never sees an empty or odd roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatedRoster(Roster);

impl ValidatedRoster {
    pub(crate) fn new_unchecked(roster: Roster) -> Self {
        Self(roster)
    }

    pub fn roster(&self) -> &Roster {
        &self.0
    }
}

impl std::ops::Deref for ValidatedRoster {
    type Target = Roster;

    fn deref(&self) -> &Roster {
        &self.0
    }
}
