//! Roster validation: gate in front of the allocator.

use crate::models::{Roster, RosterError, ValidatedRoster};

/// Check that a roster can be split into two equal teams: non-empty and of even size.
///
/// The roster is passed through unchanged on success.
pub fn validate(roster: Roster) -> Result<ValidatedRoster, RosterError> {
    let count = roster.len();
    if count == 0 {
        return Err(RosterError::EmptyRoster);
    }
    if count % 2 != 0 {
        return Err(RosterError::OddRoster { count });
    }
    Ok(ValidatedRoster::new_unchecked(roster))
}
