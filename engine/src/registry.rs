use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::game_state::TicTacToeGameState;
use crate::log;
use crate::types::GameMode;

pub type SessionId = String;

/// One independent game per session key. The registry holds no lock of its
/// own: each instance assumes a single writer, and callers that share a
/// registry across threads must serialize access around it.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: HashMap<SessionId, TicTacToeGameState>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    pub fn get(&self, session_id: &str) -> Option<&TicTacToeGameState> {
        self.games.get(session_id)
    }

    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut TicTacToeGameState> {
        self.games.get_mut(session_id)
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.games.contains_key(session_id)
    }

    /// Starts a fresh game, replacing any existing game for this session
    /// wholesale.
    pub fn new_game(&mut self, session_id: &str, mode: GameMode) -> &mut TicTacToeGameState {
        self.insert_game(session_id, TicTacToeGameState::new(mode))
    }

    pub fn new_game_with_seed(
        &mut self,
        session_id: &str,
        mode: GameMode,
        seed: u64,
    ) -> &mut TicTacToeGameState {
        self.insert_game(session_id, TicTacToeGameState::with_seed(mode, seed))
    }

    /// Returns the session's game, creating one lazily on first access.
    pub fn get_or_create(
        &mut self,
        session_id: &str,
        mode: GameMode,
    ) -> &mut TicTacToeGameState {
        self.games.entry(session_id.to_string()).or_insert_with(|| {
            log!("New {:?} game for session {}", mode, session_id);
            TicTacToeGameState::new(mode)
        })
    }

    pub fn remove(&mut self, session_id: &str) -> Option<TicTacToeGameState> {
        let removed = self.games.remove(session_id);
        if removed.is_some() {
            log!("Game session removed: {}", session_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn insert_game(
        &mut self,
        session_id: &str,
        game: TicTacToeGameState,
    ) -> &mut TicTacToeGameState {
        log!("New {:?} game for session {}", game.mode(), session_id);
        match self.games.entry(session_id.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(game);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;
    use crate::types::{GameStatus, Mark};

    #[test]
    fn test_get_or_create_is_lazy() {
        let mut registry = GameRegistry::new();
        assert!(registry.get("alice").is_none());

        registry.get_or_create("alice", GameMode::Classic);
        assert!(registry.contains("alice"));
        assert_eq!(registry.len(), 1);

        // A second access reuses the same game.
        registry
            .get_or_create("alice", GameMode::Classic)
            .place_mark(0, 0)
            .unwrap();
        assert_eq!(
            registry.get("alice").unwrap().board()[0][0],
            Mark::X
        );
    }

    #[test]
    fn test_new_game_replaces_the_session_wholesale() {
        let mut registry = GameRegistry::new();
        registry
            .new_game_with_seed("bob", GameMode::Classic, 1)
            .place_mark(1, 1)
            .unwrap();

        let game = registry.new_game_with_seed("bob", GameMode::Random, 2);
        assert_eq!(*game.board(), empty_board());
        assert_eq!(game.mode(), GameMode::Random);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut registry = GameRegistry::new();
        registry
            .new_game_with_seed("a", GameMode::Classic, 1)
            .place_mark(0, 0)
            .unwrap();
        registry.new_game_with_seed("b", GameMode::Classic, 1);

        assert_eq!(registry.get("a").unwrap().board()[0][0], Mark::X);
        assert_eq!(*registry.get("b").unwrap().board(), empty_board());
    }

    #[test]
    fn test_remove_drops_the_game() {
        let mut registry = GameRegistry::new();
        registry.new_game_with_seed("c", GameMode::Classic, 3);

        let removed = registry.remove("c").unwrap();
        assert_eq!(removed.status(), GameStatus::InProgress);
        assert!(registry.is_empty());
        assert!(registry.remove("c").is_none());
    }
}
