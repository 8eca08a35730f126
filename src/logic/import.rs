//! Player import from CSV (`name,skill,goalkeeper` with a header row).

use crate::models::Player;
use std::io::Read;

/// Errors reading a player CSV.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImportError {
    /// Malformed CSV (e.g. invalid UTF-8 or broken quoting).
    Csv { line: Option<u64>, message: String },
    /// Row parsed but its content is not acceptable.
    InvalidRow { line: u64, reason: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Csv {
                line: Some(line),
                message,
            } => write!(f, "CSV error on line {}: {}", line, message),
            ImportError::Csv { line: None, message } => write!(f, "CSV error: {}", message),
            ImportError::InvalidRow { line, reason } => write!(f, "Line {}: {}", line, reason),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv {
            line: e.position().map(|p| p.line()),
            message: e.to_string(),
        }
    }
}

/// Parse players from CSV. The goalkeeper column is optional; blank or missing means no.
pub fn parse_players_csv<R: Read>(reader: R) -> Result<Vec<Player>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut players = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let invalid = |reason: String| ImportError::InvalidRow { line, reason };

        let name = record.get(0).unwrap_or("");
        if name.is_empty() {
            return Err(invalid("player name is empty".to_string()));
        }
        let skill_field = record.get(1).unwrap_or("");
        let skill: u32 = skill_field
            .parse()
            .map_err(|_| invalid(format!("skill must be a whole number, got {:?}", skill_field)))?;
        let flag = record.get(2).unwrap_or("");
        let goalkeeper = parse_flag(flag)
            .ok_or_else(|| invalid(format!("goalkeeper must be yes/no, got {:?}", flag)))?;

        players.push(Player::new(name, skill, goalkeeper));
    }
    Ok(players)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "n" => Some(false),
        "1" | "true" | "yes" | "y" | "x" => Some(true),
        _ => None,
    }
}
