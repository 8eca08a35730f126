//! Game, RSVPs, and GameError.

use crate::models::player::PlayerId;
use crate::models::team::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Errors from game and player registration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    GameNotFound(GameId),
    PlayerNotFound(PlayerId),
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player name is blank.
    InvalidPlayerName,
    /// The player already confirmed for this game.
    DuplicateRsvp(PlayerId),
    /// The player has no RSVP for this game.
    PlayerNotConfirmed(PlayerId),
    /// Teams requested for a game nobody confirmed for.
    NoConfirmedPlayers,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameNotFound(_) => write!(f, "Game not found"),
            GameError::PlayerNotFound(_) => write!(f, "Player not found"),
            GameError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            GameError::InvalidPlayerName => write!(f, "Player name must not be empty"),
            GameError::DuplicateRsvp(_) => {
                write!(f, "This player has already confirmed attendance for this game")
            }
            GameError::PlayerNotConfirmed(_) => {
                write!(f, "This player has not confirmed attendance for this game")
            }
            GameError::NoConfirmedPlayers => write!(
                f,
                "No confirmed players for this game. Confirm attendance before generating teams"
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// One player's confirmed attendance for a game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub player_id: PlayerId,
    pub confirmed_at: DateTime<Utc>,
    /// None until teams are generated.
    pub team: Option<Team>,
}

/// A scheduled pickup game and its RSVPs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    /// In confirmation order.
    pub rsvps: Vec<Rsvp>,
}

impl Game {
    /// Create a new game with no RSVPs.
    pub fn new(title: impl Into<String>, scheduled_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            scheduled_at,
            rsvps: Vec::new(),
        }
    }

    /// Record a player's attendance. Each player may confirm once.
    pub fn confirm(&mut self, player_id: PlayerId, at: DateTime<Utc>) -> Result<(), GameError> {
        if self.is_confirmed(player_id) {
            return Err(GameError::DuplicateRsvp(player_id));
        }
        self.rsvps.push(Rsvp {
            player_id,
            confirmed_at: at,
            team: None,
        });
        Ok(())
    }

    pub fn is_confirmed(&self, player_id: PlayerId) -> bool {
        self.rsvps.iter().any(|r| r.player_id == player_id)
    }

    pub fn confirmed_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.rsvps.iter().map(|r| r.player_id)
    }

    pub fn team_of(&self, player_id: PlayerId) -> Option<Team> {
        self.rsvps
            .iter()
            .find(|r| r.player_id == player_id)
            .and_then(|r| r.team)
    }

    /// Set the team label for every given player. Fails without changes if any of them has no RSVP.
    pub fn label_players(&mut self, player_ids: &[PlayerId], team: Team) -> Result<(), GameError> {
        if let Some(&missing) = player_ids.iter().find(|&&id| !self.is_confirmed(id)) {
            return Err(GameError::PlayerNotConfirmed(missing));
        }
        for rsvp in self
            .rsvps
            .iter_mut()
            .filter(|r| player_ids.contains(&r.player_id))
        {
            rsvp.team = Some(team);
        }
        Ok(())
    }

    /// Drop every team label (a new assignment supersedes the old one).
    pub fn clear_teams(&mut self) {
        for rsvp in &mut self.rsvps {
            rsvp.team = None;
        }
    }
}
