//! Pickup match organizer: library with models, team balancing logic and storage.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    allocate, extract_goalkeepers, generate_teams, parse_players_csv, validate, GenerationError,
    ImportError,
};
pub use models::{
    Game, GameError, GameId, Player, PlayerId, Roster, RosterError, Rsvp, Team, TeamSheet, Teams,
    ValidatedRoster,
};
pub use store::{MemoryStore, PersistenceError, TeamStore};
