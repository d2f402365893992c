mod board;
mod bot_controller;
mod game_state;
pub mod logger;
mod registry;
mod session_rng;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, empty_board, get_available_moves, is_valid_move};
pub use bot_controller::{
    BotInput, BotType, calculate_minimax_move, calculate_random_move, make_bot_move,
    make_bot_move_as,
};
pub use game_state::{GameError, MoveApplied, TicTacToeGameState};
pub use registry::{GameRegistry, SessionId};
pub use session_rng::SessionRng;
pub use types::{GameMode, GameStatus, GameWinner, Mark, Party, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
