use crate::board::Board;
use crate::types::{Mark, Position, WinningLine};

// Rows first, then columns, then the two diagonals. The first matching line
// wins; evaluating after every single move guarantees at most one side can
// ever hold a completed line.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = board[r0][c0];
        if mark == Mark::Empty {
            continue;
        }
        if board[r1][c1] == mark && board[r2][c2] == mark {
            return Some(WinningLine::new(
                mark,
                Position::new(r0, c0),
                Position::new(r2, c2),
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_board;

    fn board_with(cells: &[(usize, usize, Mark)]) -> Board {
        let mut board = empty_board();
        for &(row, col, mark) in cells {
            board[row][col] = mark;
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&empty_board()), None);
    }

    #[test]
    fn test_detects_row_win() {
        let board = board_with(&[
            (1, 0, Mark::O),
            (1, 1, Mark::O),
            (1, 2, Mark::O),
            (0, 0, Mark::X),
            (2, 2, Mark::X),
        ]);

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Position::new(1, 0));
        assert_eq!(line.end, Position::new(1, 2));
    }

    #[test]
    fn test_detects_column_win() {
        let board = board_with(&[
            (0, 2, Mark::X),
            (1, 2, Mark::X),
            (2, 2, Mark::X),
            (0, 0, Mark::O),
            (1, 1, Mark::O),
        ]);

        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 2));
    }

    #[test]
    fn test_detects_main_diagonal_win() {
        let board = board_with(&[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)]);
        assert_eq!(check_win(&board), Some(Mark::X));
    }

    #[test]
    fn test_detects_anti_diagonal_win() {
        let board = board_with(&[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)]);
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        let board = board_with(&[
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (1, 2, Mark::O),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::X),
        ]);
        assert_eq!(check_win(&board), None);
    }
}
