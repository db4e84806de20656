//! Canonical chess-rule constants.
//!
//! Static literals shared by board setup, the game orchestrator and the
//! undo machinery.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Number of successful moves that can be taken back with `undo`.
pub const UNDO_DEPTH: usize = 2;
