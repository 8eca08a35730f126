//! Team generation logic: validation, allocation, the generate workflow, player import.

mod allocation;
mod generation;
mod import;
mod validation;

pub use allocation::{allocate, extract_goalkeepers};
pub use generation::{generate_teams, GenerationError};
pub use import::{parse_players_csv, ImportError};
pub use validation::validate;
