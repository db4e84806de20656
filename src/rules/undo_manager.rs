//! Bounded memento stack backing `Chess::undo`.
//!
//! A `Memento` is an opaque bincode image of a whole state value. It owns its
//! bytes outright, so a restored value shares nothing with the live one.

use std::collections::VecDeque;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::game_state::chess_rules::UNDO_DEPTH;
use crate::rules::errors::{ChessError, ChessResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    bytes: Vec<u8>,
}

impl Memento {
    pub fn capture<T: Serialize>(state: &T) -> ChessResult<Self> {
        let bytes = bincode::serialize(state).map_err(|e| ChessError::Snapshot(e.to_string()))?;
        Ok(Self { bytes })
    }

    pub fn restore<T: DeserializeOwned>(&self) -> ChessResult<T> {
        bincode::deserialize(&self.bytes).map_err(|e| ChessError::Snapshot(e.to_string()))
    }

    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.bytes.len()
    }
}

/// At most `UNDO_DEPTH` mementos: the oldest is evicted on overflow and the
/// newest is returned first.
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    mementos: VecDeque<Memento>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self {
            mementos: VecDeque::with_capacity(UNDO_DEPTH),
        }
    }

    pub fn push(&mut self, memento: Memento) {
        if self.mementos.len() == UNDO_DEPTH {
            self.mementos.pop_front();
        }
        self.mementos.push_back(memento);
    }

    pub fn pop(&mut self) -> ChessResult<Memento> {
        self.mementos
            .pop_back()
            .ok_or_else(|| ChessError::InvalidMove("no move left to undo".to_owned()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }

    pub fn clear(&mut self) {
        self.mementos.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Memento, UndoManager};
    use crate::game_state::board::Board;
    use crate::rules::errors::ChessError;

    fn memento_of(value: u32) -> Memento {
        Memento::capture(&value).expect("u32 should serialize")
    }

    #[test]
    fn third_push_evicts_the_oldest() {
        let mut undo = UndoManager::new();
        for value in 1..=3u32 {
            undo.push(memento_of(value));
        }

        assert_eq!(undo.len(), 2);
        assert_eq!(undo.pop().and_then(|m| m.restore::<u32>()), Ok(3));
        assert_eq!(undo.pop().and_then(|m| m.restore::<u32>()), Ok(2));
        assert!(matches!(undo.pop(), Err(ChessError::InvalidMove(_))));
        assert!(undo.is_empty());
    }

    #[test]
    fn empty_stack_pop_fails() {
        let mut undo = UndoManager::default();
        assert!(matches!(undo.pop(), Err(ChessError::InvalidMove(_))));
    }

    #[test]
    fn restored_board_is_independent_of_later_mutation() {
        let mut board = Board::new_game();
        let memento = Memento::capture(&board).expect("board should serialize");
        assert!(memento.size_in_bytes() > 0);

        board.move_piece(12, 28);
        board.update_fen();

        let restored: Board = memento.restore().expect("board should deserialize");
        assert_eq!(restored, Board::new_game());
        assert_ne!(restored, board);
    }

    #[test]
    fn clear_drops_everything() {
        let mut undo = UndoManager::new();
        undo.push(memento_of(7));
        undo.clear();
        assert!(undo.is_empty());
    }
}
