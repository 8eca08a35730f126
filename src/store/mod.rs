//! Persistence port for team generation, and the in-memory store behind the web app.

mod memory;

pub use memory::MemoryStore;

use crate::models::{GameId, Player, PlayerId, Team, Teams};

/// Errors from the persistence adapter.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PersistenceError {
    GameNotFound(GameId),
    /// A team write named a player with no RSVP for the game.
    PlayerNotInGame { game_id: GameId, player_id: PlayerId },
    /// Backing storage could not be reached or refused the write.
    Unavailable(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::GameNotFound(id) => write!(f, "Game {} not found", id),
            PersistenceError::PlayerNotInGame { game_id, player_id } => write!(
                f,
                "Player {} has not confirmed attendance for game {}",
                player_id, game_id
            ),
            PersistenceError::Unavailable(reason) => write!(f, "Storage unavailable: {}", reason),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Where team generation reads confirmed players from and writes team labels to.
pub trait TeamStore {
    /// Players with an RSVP for the game, in any order.
    fn confirmed_players(&self, game_id: GameId) -> Result<Vec<Player>, PersistenceError>;

    /// Set the team label of every given player in one game. Reapplying the same call leaves the
    /// stored state unchanged.
    fn assign_team(
        &mut self,
        game_id: GameId,
        player_ids: &[PlayerId],
        team: Team,
    ) -> Result<(), PersistenceError>;

    /// Store a full allocation: team 1, then team 2.
    ///
    /// The default performs two independent writes, so a failure on team 2 leaves team 1 written.
    /// Stores that can write both at once should override this.
    fn assign_teams(&mut self, game_id: GameId, teams: &Teams) -> Result<(), PersistenceError> {
        for team in [Team::One, Team::Two] {
            self.assign_team(game_id, teams.members(team), team)?;
        }
        Ok(())
    }
}
