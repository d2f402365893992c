use thiserror::Error;

use crate::board::{self, BOARD_SIZE, Board};
use crate::session_rng::SessionRng;
use crate::types::{GameMode, GameStatus, GameWinner, Mark, Party, Position};
use crate::win_detector::check_win;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position is outside the board")]
    OutOfBounds,
    #[error("cell is already marked")]
    CellOccupied,
    #[error("game is already over")]
    GameOver,
    #[error("operation is not valid in the current mode or game phase")]
    InvalidModeOperation,
}

/// Returned from a successful move. The caller needs the placed mark back
/// because in random mode it is not predictable from the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveApplied {
    pub mark: Mark,
    pub status: GameStatus,
}

/// One game of tic-tac-toe. The board is only ever mutated through
/// [`TicTacToeGameState::place_mark`]; the status cache is recomputed after
/// every single move. One instance per session, single writer.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    mode: GameMode,
    current_party: Party,
    human_side: Mark,
    bot_side: Mark,
    status: GameStatus,
    last_move: Option<Position>,
    rng: SessionRng,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, SessionRng::from_random())
    }

    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, SessionRng::new(seed))
    }

    fn with_rng(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            board: board::empty_board(),
            mode,
            current_party: Party::Human,
            human_side: Mark::X,
            bot_side: Mark::O,
            status: GameStatus::InProgress,
            last_move: None,
            rng,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_board(
        mode: GameMode,
        board: Board,
        human_side: Mark,
        bot_side: Mark,
    ) -> Self {
        let mut state = Self::with_rng(mode, SessionRng::new(0));
        state.board = board;
        state.human_side = human_side;
        state.bot_side = bot_side;
        state.update_status();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_party(&self) -> Party {
        self.current_party
    }

    pub fn human_side(&self) -> Mark {
        self.human_side
    }

    pub fn bot_side(&self) -> Mark {
        self.bot_side
    }

    pub fn side_of(&self, party: Party) -> Mark {
        match party {
            Party::Human => self.human_side,
            Party::Bot => self.bot_side,
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub(crate) fn rng_mut(&mut self) -> &mut SessionRng {
        &mut self.rng
    }

    /// Applies a move for the current mover. In classic mode the placed mark
    /// is the mover's own side; in random mode it is a fresh uniform draw,
    /// independent of who moved. The turn only advances while the game is
    /// still in progress.
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<MoveApplied, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds);
        }
        if self.board[row][col] != Mark::Empty {
            return Err(GameError::CellOccupied);
        }

        let mark = match self.mode {
            GameMode::Classic => self.side_of(self.current_party),
            GameMode::Random => {
                if self.rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        self.board[row][col] = mark;
        self.last_move = Some(Position::new(row, col));
        self.update_status();

        if self.status == GameStatus::InProgress {
            self.current_party = self.current_party.other();
        }

        Ok(MoveApplied {
            mark,
            status: self.status,
        })
    }

    fn update_status(&mut self) {
        if let Some(mark) = check_win(&self.board) {
            self.status = GameStatus::Won(mark);
        } else if board::is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    /// Resolves the raw status to the party it belongs to. `None` while the
    /// game is in progress.
    pub fn actual_winner(&self) -> Option<GameWinner> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(GameWinner::Draw),
            GameStatus::Won(mark) if mark == self.human_side => Some(GameWinner::Human),
            GameStatus::Won(_) => Some(GameWinner::Bot),
        }
    }

    /// Clears the board for a fresh game. Mode, side assignment and RNG
    /// survive a reset; call [`TicTacToeGameState::randomize_sides`] to
    /// re-roll sides.
    pub fn reset(&mut self) {
        self.board = board::empty_board();
        self.current_party = Party::Human;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    /// Random mode only: assigns the two sides to the two parties with a
    /// 50/50 draw. Rejected once any mark is on the board, so sides cannot
    /// change under a game already in play.
    pub fn randomize_sides(&mut self) -> Result<(), GameError> {
        if self.mode != GameMode::Random {
            return Err(GameError::InvalidModeOperation);
        }
        if self.board != board::empty_board() {
            return Err(GameError::InvalidModeOperation);
        }

        if self.rng.random_bool() {
            self.human_side = Mark::X;
            self.bot_side = Mark::O;
        } else {
            self.human_side = Mark::O;
            self.bot_side = Mark::X;
        }
        Ok(())
    }
}
