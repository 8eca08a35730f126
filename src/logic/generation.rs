//! Team generation for a game: load the confirmed roster, validate, allocate, persist.

use crate::logic::{allocate, validate};
use crate::models::{GameId, PlayerId, Roster, RosterError, Teams};
use crate::store::{PersistenceError, TeamStore};

/// Why teams could not be generated for a game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenerationError {
    /// The confirmed roster cannot be split; nothing was allocated or written.
    Roster(RosterError),
    /// Loading the roster or writing either team failed.
    Persistence(PersistenceError),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::Roster(e) => write!(f, "{}", e),
            GenerationError::Persistence(e) => write!(f, "Could not save teams: {}", e),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Roster(e) => Some(e),
            GenerationError::Persistence(e) => Some(e),
        }
    }
}

impl From<RosterError> for GenerationError {
    fn from(e: RosterError) -> Self {
        GenerationError::Roster(e)
    }
}

impl From<PersistenceError> for GenerationError {
    fn from(e: PersistenceError) -> Self {
        GenerationError::Persistence(e)
    }
}

/// Generate and store two balanced teams for a game.
///
/// 1. Load the confirmed players and sort them by skill.
/// 2. Validate: non-empty, even count. A rejected roster stops here.
/// 3. Allocate the two teams.
/// 4. Write both teams through the store; any write failure fails the whole run.
///
/// Rerunning is safe: allocation is deterministic and team writes are idempotent.
pub fn generate_teams<S>(store: &mut S, game_id: GameId) -> Result<Teams, GenerationError>
where
    S: TeamStore + ?Sized,
{
    let roster = Roster::new(store.confirmed_players(game_id)?);

    let roster = validate(roster).map_err(|e| {
        log::warn!("Cannot generate teams for game {}: {}", game_id, e);
        e
    })?;

    let teams = allocate(&roster);

    if let Err(e) = store.assign_teams(game_id, &teams) {
        log::error!("Saving teams for game {} failed: {}", game_id, e);
        return Err(e.into());
    }

    log::info!(
        "Generated teams for game {}: {} v {} players, skill {} v {}",
        game_id,
        teams.team_1.len(),
        teams.team_2.len(),
        skill_total(&roster, &teams.team_1),
        skill_total(&roster, &teams.team_2)
    );
    Ok(teams)
}

fn skill_total(roster: &Roster, ids: &[PlayerId]) -> u64 {
    roster
        .players()
        .iter()
        .filter(|p| ids.contains(&p.id))
        .map(|p| u64::from(p.skill))
        .sum()
}
