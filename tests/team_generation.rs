//! Integration tests for the generate workflow and team storage.

use pickup_teams_web::{
    generate_teams, GameError, GameId, GenerationError, MemoryStore, PersistenceError, Player,
    PlayerId, RosterError, Team, TeamStore, Teams,
};
use uuid::Uuid;

/// Fake store: fixed roster, records every team write, optionally fails writes for one team.
struct RecordingStore {
    players: Vec<Player>,
    writes: Vec<(Vec<PlayerId>, Team)>,
    fail_on: Option<Team>,
}

impl RecordingStore {
    fn new(skills: &[u32]) -> Self {
        Self {
            players: skills
                .iter()
                .enumerate()
                .map(|(i, &s)| Player::outfield(format!("P{i}"), s))
                .collect(),
            writes: Vec::new(),
            fail_on: None,
        }
    }
}

impl TeamStore for RecordingStore {
    fn confirmed_players(&self, _game_id: GameId) -> Result<Vec<Player>, PersistenceError> {
        Ok(self.players.clone())
    }

    fn assign_team(
        &mut self,
        _game_id: GameId,
        player_ids: &[PlayerId],
        team: Team,
    ) -> Result<(), PersistenceError> {
        if self.fail_on == Some(team) {
            return Err(PersistenceError::Unavailable("connection reset".to_string()));
        }
        self.writes.push((player_ids.to_vec(), team));
        Ok(())
    }
}

fn store_with_game(players: &[(&str, u32, bool)]) -> (MemoryStore, GameId, Vec<PlayerId>) {
    let mut store = MemoryStore::new();
    let game = store.create_game("Thursday five-a-side", None);
    let mut ids = Vec::new();
    for &(name, skill, goalkeeper) in players {
        let p = store.add_player(name, skill, goalkeeper).unwrap();
        store.confirm_attendance(game.id, p.id).unwrap();
        ids.push(p.id);
    }
    (store, game.id, ids)
}

#[test]
fn odd_roster_never_reaches_allocation_or_storage() {
    let mut store = RecordingStore::new(&[1, 2, 3, 4, 5]);
    let result = generate_teams(&mut store, Uuid::new_v4());
    assert_eq!(
        result,
        Err(GenerationError::Roster(RosterError::OddRoster { count: 5 }))
    );
    assert!(store.writes.is_empty());
}

#[test]
fn empty_roster_is_rejected_without_writes() {
    let mut store = RecordingStore::new(&[]);
    let result = generate_teams(&mut store, Uuid::new_v4());
    assert_eq!(result, Err(GenerationError::Roster(RosterError::EmptyRoster)));
    assert!(store.writes.is_empty());
}

#[test]
fn each_team_is_written_once() {
    let mut store = RecordingStore::new(&[10, 20, 30, 40]);
    let teams = generate_teams(&mut store, Uuid::new_v4()).unwrap();
    assert_eq!(
        store.writes,
        vec![(teams.team_1.clone(), Team::One), (teams.team_2.clone(), Team::Two)]
    );
}

#[test]
fn repeated_rsvp_rows_are_allocated_once() {
    let mut store = RecordingStore::new(&[10, 20, 30, 40]);
    let repeated = store.players[2].clone();
    store.players.push(repeated);

    let teams = generate_teams(&mut store, Uuid::new_v4()).unwrap();
    assert_eq!(teams.team_1.len(), 2);
    assert_eq!(teams.team_2.len(), 2);
    for p in &store.players {
        assert!(teams.team_of(p.id).is_some());
    }
}

#[test]
fn failed_second_write_fails_the_run() {
    let mut store = RecordingStore::new(&[10, 20, 30, 40]);
    store.fail_on = Some(Team::Two);
    let result = generate_teams(&mut store, Uuid::new_v4());
    assert!(matches!(
        result,
        Err(GenerationError::Persistence(PersistenceError::Unavailable(_)))
    ));
}

#[test]
fn memory_store_end_to_end() {
    let (mut store, game_id, ids) = store_with_game(&[
        ("Ana", 3, false),
        ("Bia", 5, true),
        ("Caio", 8, false),
        ("Duda", 12, false),
        ("Edu", 15, true),
        ("Fabi", 20, false),
    ]);

    let teams = generate_teams(&mut store, game_id).unwrap();
    assert_eq!(teams.team_1.len(), 3);
    assert_eq!(teams.team_2.len(), 3);

    let game = store.game(game_id).unwrap();
    assert_eq!(game.team_of(ids[4]), Some(Team::One));
    assert_eq!(game.team_of(ids[1]), Some(Team::Two));
    for &id in &ids {
        assert_eq!(game.team_of(id), teams.team_of(id));
    }

    let sheet = store.team_sheet(game_id).unwrap();
    assert!(sheet.unassigned.is_empty());
    assert_eq!(sheet.skill_total(Team::One), 30);
    assert_eq!(sheet.skill_total(Team::Two), 33);
}

#[test]
fn regeneration_supersedes_previous_teams() {
    let (mut store, game_id, _) = store_with_game(&[
        ("Ana", 10, false),
        ("Bia", 20, false),
        ("Caio", 30, false),
        ("Duda", 40, false),
    ]);
    generate_teams(&mut store, game_id).unwrap();

    let late_1 = store.add_player("Edu", 25, false).unwrap();
    let late_2 = store.add_player("Fabi", 35, false).unwrap();
    store.confirm_attendance(game_id, late_1.id).unwrap();
    store.confirm_attendance(game_id, late_2.id).unwrap();
    assert_eq!(store.team_sheet(game_id).unwrap().unassigned.len(), 2);

    let teams = generate_teams(&mut store, game_id).unwrap();
    let sheet = store.team_sheet(game_id).unwrap();
    assert!(sheet.unassigned.is_empty());
    assert_eq!(sheet.team_1.len(), 3);
    assert_eq!(sheet.team_2.len(), 3);
    assert_eq!(teams.len(), 6);
}

#[test]
fn unknown_game_is_a_persistence_failure() {
    let mut store = MemoryStore::new();
    let missing = Uuid::new_v4();
    assert_eq!(
        generate_teams(&mut store, missing),
        Err(GenerationError::Persistence(PersistenceError::GameNotFound(missing)))
    );
}

#[test]
fn assign_team_is_idempotent() {
    let (mut store, game_id, ids) = store_with_game(&[("Ana", 1, false), ("Bia", 2, false)]);
    store.assign_team(game_id, &ids[..1], Team::Two).unwrap();
    let once = store.game(game_id).unwrap().rsvps.clone();
    store.assign_team(game_id, &ids[..1], Team::Two).unwrap();
    assert_eq!(store.game(game_id).unwrap().rsvps, once);
}

#[test]
fn memory_store_writes_both_teams_or_neither() {
    let (mut store, game_id, ids) = store_with_game(&[
        ("Ana", 1, false),
        ("Bia", 2, false),
        ("Caio", 3, false),
        ("Duda", 4, false),
    ]);
    generate_teams(&mut store, game_id).unwrap();
    let before = store.game(game_id).unwrap().rsvps.clone();

    let stranger = Uuid::new_v4();
    let bad = Teams {
        team_1: vec![ids[1], ids[2]],
        team_2: vec![ids[0], stranger],
    };
    assert_eq!(
        store.assign_teams(game_id, &bad),
        Err(PersistenceError::PlayerNotInGame {
            game_id,
            player_id: stranger
        })
    );
    assert_eq!(store.game(game_id).unwrap().rsvps, before);
}

#[test]
fn duplicate_rsvp_is_rejected() {
    let (mut store, game_id, ids) = store_with_game(&[("Ana", 1, false)]);
    assert!(matches!(
        store.confirm_attendance(game_id, ids[0]),
        Err(GameError::DuplicateRsvp(id)) if id == ids[0]
    ));
}

#[test]
fn rsvp_for_unknown_player_or_game() {
    let (mut store, game_id, ids) = store_with_game(&[("Ana", 1, false)]);
    let nobody = Uuid::new_v4();
    assert!(matches!(
        store.confirm_attendance(game_id, nobody),
        Err(GameError::PlayerNotFound(_))
    ));
    assert!(matches!(
        store.confirm_attendance(Uuid::new_v4(), ids[0]),
        Err(GameError::GameNotFound(_))
    ));
}

#[test]
fn team_sheet_requires_confirmed_players() {
    let mut store = MemoryStore::new();
    let game = store.create_game("Empty game", None);
    assert_eq!(
        store.team_sheet(game.id),
        Err(GameError::NoConfirmedPlayers)
    );
}

#[test]
fn player_names_are_unique_and_non_blank() {
    let mut store = MemoryStore::new();
    store.add_player("Ana", 5, false).unwrap();
    assert_eq!(
        store.add_player("  ana ", 7, true),
        Err(GameError::DuplicatePlayerName)
    );
    assert_eq!(store.add_player("   ", 7, true), Err(GameError::InvalidPlayerName));
    assert_eq!(store.players().len(), 1);
}

#[test]
fn import_is_all_or_nothing() {
    let mut store = MemoryStore::new();
    store.add_player("Ana", 5, false).unwrap();
    let result = store.import_players(vec![
        Player::outfield("Bia", 3),
        Player::outfield("ANA", 4),
    ]);
    assert_eq!(result, Err(GameError::DuplicatePlayerName));
    assert_eq!(store.players().len(), 1);

    let imported = store
        .import_players(vec![Player::outfield("Bia", 3), Player::keeper("Caio", 6)])
        .unwrap();
    assert_eq!(imported.len(), 2);
    let names: Vec<String> = store.players().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Ana", "Bia", "Caio"]);
}

#[test]
fn team_sheet_totals_do_not_overflow() {
    let (mut store, game_id, ids) = store_with_game(&[
        ("Ana", u32::MAX, false),
        ("Bia", u32::MAX, false),
    ]);
    store.assign_team(game_id, &ids, Team::One).unwrap();

    let sheet = store.team_sheet(game_id).unwrap();
    assert_eq!(sheet.skill_total(Team::One), 2 * u64::from(u32::MAX));
    assert_eq!(sheet.skill_total(Team::Two), 0);
}
