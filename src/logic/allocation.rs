//! Team allocation: spread the two best goalkeepers, then balance the rest by skill.
//!
//! Phase A takes the two highest-rated goalkeepers (if there are at least two) and puts one on
//! each team. Phase B walks the remaining skill-sorted pool inward from both ends, pairing the
//! weakest remaining player with the strongest. Two placements of those pairs are computed and
//! the one with the smaller skill gap wins (whole pairs on a tie):
//!
//! - split: the stronger player of each pair joins the team with the lower running total, the
//!   weaker one joins the other team;
//! - whole: each pair joins the lighter team while it has room for another whole pair. With an
//!   odd number of pairs the innermost pair is split.
//!
//! The split placement never ends further apart than the highest skill in the roster.

use crate::models::{Player, Team, Teams, ValidatedRoster};

/// Split a validated, skill-sorted roster into two teams of equal size.
///
/// Deterministic: the same roster always yields the same teams. Every player lands on exactly
/// one team.
pub fn allocate(roster: &ValidatedRoster) -> Teams {
    let mut start = Balance::default();
    log::debug!(
        "allocating {} players ({} goalkeepers)",
        roster.len(),
        roster.goalkeeper_count()
    );

    let (keepers, pool) = extract_goalkeepers(roster.players());
    if let Some((first, second)) = keepers {
        log::debug!(
            "goalkeepers {} (skill {}) -> team 1, {} (skill {}) -> team 2",
            first.id,
            first.skill,
            second.id,
            second.skill
        );
        start.place(Team::One, first);
        start.place(Team::Two, second);
    }

    // Extraction removes either zero or two players from an even roster.
    debug_assert!(pool.len() % 2 == 0, "odd pool after goalkeeper extraction");

    let mut whole = start.clone();
    whole.pair_whole(&pool);
    let mut split = start;
    split.pair_split(&pool);

    let best = if split.gap() < whole.gap() { split } else { whole };
    log::debug!(
        "allocated {} players, skill totals {} / {}",
        best.teams.len(),
        best.totals[0],
        best.totals[1]
    );
    best.teams
}

/// Pull the two highest-rated goalkeepers out of a skill-ascending player list.
///
/// Returns `(team 1 keeper, team 2 keeper)` and the pool of everyone else, still in ascending
/// order. With fewer than two goalkeepers nothing is extracted and the pool is the whole list.
/// Goalkeepers beyond the top two stay in the pool as ordinary players.
pub fn extract_goalkeepers(players: &[Player]) -> (Option<(&Player, &Player)>, Vec<&Player>) {
    let mut keepers: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.goalkeeper)
        .map(|(i, _)| i)
        .collect();
    match (keepers.pop(), keepers.pop()) {
        (Some(first), Some(second)) => {
            let pool = players
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != first && i != second)
                .map(|(_, p)| p)
                .collect();
            (Some((&players[first], &players[second])), pool)
        }
        _ => (None, players.iter().collect()),
    }
}

/// Running state of an allocation.
#[derive(Clone, Default)]
struct Balance {
    teams: Teams,
    /// Skill totals for team 1 and team 2.
    totals: [u64; 2],
}

impl Balance {
    fn place(&mut self, team: Team, player: &Player) {
        self.teams.push(team, player.id);
        self.totals[slot(team)] += u64::from(player.skill);
    }

    /// Team with the lower skill total; team 1 on a tie.
    fn lighter(&self) -> Team {
        if self.totals[1] < self.totals[0] {
            Team::Two
        } else {
            Team::One
        }
    }

    fn gap(&self) -> u64 {
        self.totals[0].abs_diff(self.totals[1])
    }

    fn split_pair(&mut self, low: &Player, high: &Player) {
        let lighter = self.lighter();
        self.place(lighter, high);
        self.place(lighter.other(), low);
    }

    fn pair_split(&mut self, pool: &[&Player]) {
        let n = pool.len();
        for i in 0..n / 2 {
            self.split_pair(pool[i], pool[n - 1 - i]);
        }
    }

    fn pair_whole(&mut self, pool: &[&Player]) {
        let n = pool.len();
        let pair_count = n / 2;
        let whole_pairs_per_team = pair_count / 2;
        let mut pairs = [0usize; 2];

        for i in 0..pair_count {
            let low = pool[i];
            let high = pool[n - 1 - i];

            if pair_count % 2 == 1 && i == pair_count - 1 {
                // Middle-ranked leftover pair.
                self.split_pair(low, high);
                continue;
            }

            let lighter = self.lighter();
            let team = if pairs[slot(lighter)] < whole_pairs_per_team {
                lighter
            } else {
                lighter.other()
            };
            self.place(team, low);
            self.place(team, high);
            pairs[slot(team)] += 1;
        }
    }
}

fn slot(team: Team) -> usize {
    match team {
        Team::One => 0,
        Team::Two => 1,
    }
}
