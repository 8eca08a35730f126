//! In-memory players, games and RSVPs.

use crate::models::{Game, GameError, GameId, Player, PlayerId, Team, TeamSheet, Teams};
use crate::store::{PersistenceError, TeamStore};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Registered players and games, held in memory for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    players: HashMap<PlayerId, Player>,
    games: HashMap<GameId, Game>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Names must be non-blank and unique (case-insensitive).
    pub fn add_player(&mut self, name: &str, skill: u32, goalkeeper: bool) -> Result<Player, GameError> {
        let player = Player::new(name.trim(), skill, goalkeeper);
        self.check_new_player(&player)?;
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    /// Register several players at once. Nothing is added if any of them is rejected.
    pub fn import_players(&mut self, players: Vec<Player>) -> Result<Vec<Player>, GameError> {
        for (i, p) in players.iter().enumerate() {
            self.check_new_player(p)?;
            let repeated = players[..i]
                .iter()
                .any(|q| q.name.eq_ignore_ascii_case(&p.name));
            if repeated {
                return Err(GameError::DuplicatePlayerName);
            }
        }
        for p in &players {
            self.players.insert(p.id, p.clone());
        }
        Ok(players)
    }

    fn check_new_player(&self, player: &Player) -> Result<(), GameError> {
        if player.name.trim().is_empty() {
            return Err(GameError::InvalidPlayerName);
        }
        let is_duplicate = self
            .players
            .values()
            .any(|p| p.name.eq_ignore_ascii_case(player.name.trim()));
        if is_duplicate {
            return Err(GameError::DuplicatePlayerName);
        }
        Ok(())
    }

    /// All players, sorted by name.
    pub fn players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        players.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        players
    }

    pub fn create_game(&mut self, title: &str, scheduled_at: Option<DateTime<Utc>>) -> Game {
        let game = Game::new(title.trim(), scheduled_at);
        self.games.insert(game.id, game.clone());
        game
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Confirm a registered player for a game.
    pub fn confirm_attendance(
        &mut self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<&Game, GameError> {
        if !self.players.contains_key(&player_id) {
            return Err(GameError::PlayerNotFound(player_id));
        }
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        game.confirm(player_id, Utc::now())?;
        Ok(&*game)
    }

    /// Confirmed players of a game grouped by team label.
    pub fn team_sheet(&self, game_id: GameId) -> Result<TeamSheet, GameError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        if game.rsvps.is_empty() {
            return Err(GameError::NoConfirmedPlayers);
        }
        let mut sheet = TeamSheet::default();
        for rsvp in &game.rsvps {
            let Some(player) = self.players.get(&rsvp.player_id) else {
                continue;
            };
            let list = match rsvp.team {
                Some(Team::One) => &mut sheet.team_1,
                Some(Team::Two) => &mut sheet.team_2,
                None => &mut sheet.unassigned,
            };
            list.push(player.clone());
        }
        for list in [&mut sheet.team_1, &mut sheet.team_2, &mut sheet.unassigned] {
            list.sort_by(|a, b| b.skill.cmp(&a.skill));
        }
        Ok(sheet)
    }
}

fn label(game: &mut Game, player_ids: &[PlayerId], team: Team) -> Result<(), PersistenceError> {
    let game_id = game.id;
    game.label_players(player_ids, team).map_err(|e| match e {
        GameError::PlayerNotConfirmed(player_id) => PersistenceError::PlayerNotInGame {
            game_id,
            player_id,
        },
        other => PersistenceError::Unavailable(other.to_string()),
    })
}

impl TeamStore for MemoryStore {
    fn confirmed_players(&self, game_id: GameId) -> Result<Vec<Player>, PersistenceError> {
        let game = self
            .games
            .get(&game_id)
            .ok_or(PersistenceError::GameNotFound(game_id))?;
        Ok(game
            .confirmed_ids()
            .filter_map(|id| self.players.get(&id).cloned())
            .collect())
    }

    fn assign_team(
        &mut self,
        game_id: GameId,
        player_ids: &[PlayerId],
        team: Team,
    ) -> Result<(), PersistenceError> {
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(PersistenceError::GameNotFound(game_id))?;
        label(game, player_ids, team)
    }

    /// Both teams are written to a copy of the game, which replaces the stored one only when
    /// both writes succeed. Labels from an earlier assignment are cleared first.
    fn assign_teams(&mut self, game_id: GameId, teams: &Teams) -> Result<(), PersistenceError> {
        let stored = self
            .games
            .get_mut(&game_id)
            .ok_or(PersistenceError::GameNotFound(game_id))?;
        let mut staged = stored.clone();
        staged.clear_teams();
        label(&mut staged, &teams.team_1, Team::One)?;
        label(&mut staged, &teams.team_2, Team::Two)?;
        *stored = staged;
        Ok(())
    }
}
