use crate::board::{BOARD_SIZE, Board, get_available_moves, is_board_full};
use crate::game_state::{GameError, TicTacToeGameState};
use crate::session_rng::SessionRng;
use crate::types::{GameMode, GameStatus, Mark, Position};
use crate::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// The two opponent strategies. Which one applies is pinned by the game mode
/// at selection time; see [`GameMode::bot_type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    Minimax,
    Random,
}

impl GameMode {
    /// Exhaustive search only makes sense when marks are deterministic, so
    /// classic mode gets minimax and random mode gets random placement.
    pub fn bot_type(self) -> BotType {
        match self {
            GameMode::Classic => BotType::Minimax,
            GameMode::Random => BotType::Random,
        }
    }
}

/// Snapshot handed to the move calculators. Searching over the copy keeps
/// the live board untouched no matter what the search does internally.
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.side_of(state.current_party()),
        }
    }
}

/// Computes a move for the current mover with the strategy bound to the
/// game's mode and applies it through the normal move path. `Ok(None)` when
/// the game is already over.
pub fn make_bot_move(state: &mut TicTacToeGameState) -> Result<Option<Position>, GameError> {
    let bot_type = state.mode().bot_type();
    make_bot_move_as(state, bot_type)
}

/// Like [`make_bot_move`] but with an explicit strategy. Minimax is rejected
/// in random mode: the searcher cannot know which mark a move will place.
pub fn make_bot_move_as(
    state: &mut TicTacToeGameState,
    bot_type: BotType,
) -> Result<Option<Position>, GameError> {
    if bot_type == BotType::Minimax && state.mode() != GameMode::Classic {
        return Err(GameError::InvalidModeOperation);
    }
    if state.status() != GameStatus::InProgress {
        return Ok(None);
    }

    let input = BotInput::from_game_state(state);
    let chosen = match bot_type {
        BotType::Minimax => calculate_minimax_move(&input),
        BotType::Random => calculate_random_move(&input, state.rng_mut()),
    };

    match chosen {
        Some(pos) => {
            state.place_mark(pos.row, pos.col)?;
            Ok(Some(pos))
        }
        None => Ok(None),
    }
}

/// Full-depth exhaustive search. Terminal scores are +10 for a win of
/// `bot_mark`, -10 for the other side, 0 for a draw, with no depth discount.
/// Ties break to the first cell in row-major order that achieves a strictly
/// better score.
pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    if check_win(&input.board).is_some() {
        return None;
    }

    let opponent_mark = match input.bot_mark {
        Mark::O => Mark::X,
        _ => Mark::O,
    };

    let mut board = input.board;
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board[row][col] != Mark::Empty {
                continue;
            }

            board[row][col] = input.bot_mark;
            let score = minimax(&mut board, input.bot_mark, opponent_mark, false);
            board[row][col] = Mark::Empty;

            if score > best_score {
                best_score = score;
                best_move = Some(Position::new(row, col));
            }
        }
    }

    best_move
}

fn minimax(board: &mut Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }
    if is_board_full(board) {
        return 0;
    }

    let (mover, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (opponent_mark, i32::MAX)
    };

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board[row][col] != Mark::Empty {
                continue;
            }

            board[row][col] = mover;
            let score = minimax(board, bot_mark, opponent_mark, !is_maximizing);
            board[row][col] = Mark::Empty;

            best = if is_maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
    }

    best
}

/// Uniform choice among the empty cells. The mark the move will place is a
/// separate, independent draw inside the move path.
pub fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available = get_available_moves(&input.board);
    if available.is_empty() {
        return None;
    }
    let index = rng.random_range(0..available.len());
    Some(available[index])
}
