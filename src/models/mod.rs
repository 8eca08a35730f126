//! Data structures for pickup games: players, games and RSVPs, rosters, teams.

mod game;
mod player;
mod roster;
mod team;

pub use game::{Game, GameError, GameId, Rsvp};
pub use player::{Player, PlayerId};
pub use roster::{Roster, RosterError, ValidatedRoster};
pub use team::{Team, TeamSheet, Teams};
