use tictactoe_engine::{
    Board, GameMode, GameWinner, TicTacToeGameState, check_win_with_line,
};

/// The board always shows the real marks, even mid-game in random mode;
/// only the side attribution is deferred to the end of the game.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    0   1   2\n");
    for (row, cells) in board.iter().enumerate() {
        let line: Vec<String> = cells.iter().map(|mark| mark.to_string()).collect();
        out.push_str(&format!("{}   {}\n", row, line.join(" | ")));
    }
    out
}

pub fn describe_start(game: &TicTacToeGameState) -> String {
    match game.mode() {
        GameMode::Classic => format!(
            "Classic mode: you play {}, the bot plays {} and searches every line.",
            game.human_side(),
            game.bot_side()
        ),
        GameMode::Random => format!(
            "Random mode: every move places a random mark. You own side {}, the bot owns side {}.",
            game.human_side(),
            game.bot_side()
        ),
    }
}

pub fn describe_outcome(game: &TicTacToeGameState) -> Option<String> {
    let winner = game.actual_winner()?;
    let mut message = match winner {
        GameWinner::Human => "You win!".to_string(),
        GameWinner::Bot => "The bot wins!".to_string(),
        GameWinner::Draw => "It's a draw.".to_string(),
    };

    if let Some(line) = check_win_with_line(game.board()) {
        message.push_str(&format!(
            " Side {} completed the line from ({}, {}) to ({}, {}).",
            line.mark, line.start.row, line.start.col, line.end.row, line.end.col
        ));
    }

    Some(message)
}
