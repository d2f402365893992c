use crate::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

pub type Board = [[Mark; BOARD_SIZE]; BOARD_SIZE];

pub fn empty_board() -> Board {
    [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE]
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_valid_move(board: &Board, row: usize, col: usize) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    board[row][col] == Mark::Empty
}

pub fn is_board_full(board: &Board) -> bool {
    board
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = empty_board();
        assert_eq!(get_available_moves(&board).len(), 9);
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_available_moves_are_in_row_major_order() {
        let mut board = empty_board();
        board[0][0] = Mark::X;
        board[1][1] = Mark::O;

        let moves = get_available_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Position::new(0, 1));
        assert_eq!(moves[1], Position::new(0, 2));
        assert_eq!(moves[2], Position::new(1, 0));
        assert_eq!(moves[3], Position::new(1, 2));
    }

    #[test]
    fn test_is_valid_move_checks_bounds_and_occupancy() {
        let mut board = empty_board();
        board[2][2] = Mark::O;

        assert!(is_valid_move(&board, 0, 0));
        assert!(!is_valid_move(&board, 2, 2));
        assert!(!is_valid_move(&board, 3, 0));
        assert!(!is_valid_move(&board, 0, 3));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = [[Mark::X; BOARD_SIZE]; BOARD_SIZE];
        assert!(is_board_full(&board));
        assert!(get_available_moves(&board).is_empty());
    }
}
