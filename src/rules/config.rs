//! Per-game rules configuration.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::rules::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Position loaded by `Chess::with_config` and `Chess::restart`.
    pub starting_fen: String,
    /// Reject moves the piece cannot geometrically make before the
    /// self-check test runs. Off by default: callers are expected to submit
    /// moves their own move generator produced.
    pub enforce_piece_geometry: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_fen: STARTING_POSITION_FEN.to_owned(),
            enforce_piece_geometry: false,
        }
    }
}

impl RulesConfig {
    pub fn from_fen(fen: &str) -> Self {
        Self {
            starting_fen: fen.to_owned(),
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing keys take their default values.
    pub fn from_json_str(json: &str) -> ChessResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ChessError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChessResult<()> {
        Board::from_fen(&self.starting_fen).map(|_| ())
    }
}
