use super::board::Board;
use super::types::{Action, BOARD_SIZE, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Action,
    pub end: Action,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Action, end: Action) -> Self {
        Self { mark, start, end }
    }
}

/// Scans rows, then columns, then the main and anti diagonals, and returns the first
/// complete line. A board with lines for both players reports whichever comes first.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let last = BOARD_SIZE - 1;

    for row in 0..BOARD_SIZE {
        if let Some(mark) = check_horizontal(board, row) {
            return Some(WinningLine::new(mark, Action::new(row, 0), Action::new(row, last)));
        }
    }

    for col in 0..BOARD_SIZE {
        if let Some(mark) = check_vertical(board, col) {
            return Some(WinningLine::new(mark, Action::new(0, col), Action::new(last, col)));
        }
    }

    if let Some(mark) = check_diagonal_down_right(board) {
        return Some(WinningLine::new(mark, Action::new(0, 0), Action::new(last, last)));
    }

    if let Some(mark) = check_diagonal_down_left(board) {
        return Some(WinningLine::new(mark, Action::new(0, last), Action::new(last, 0)));
    }

    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

fn line_owner(mut cells: impl Iterator<Item = Mark>) -> Option<Mark> {
    let first = cells.next()?;
    if first == Mark::Empty {
        return None;
    }
    cells.all(|mark| mark == first).then_some(first)
}

fn check_horizontal(board: &Board, row: usize) -> Option<Mark> {
    line_owner(board.rows()[row].iter().copied())
}

fn check_vertical(board: &Board, col: usize) -> Option<Mark> {
    line_owner(board.rows().iter().map(|cells| cells[col]))
}

fn check_diagonal_down_right(board: &Board) -> Option<Mark> {
    line_owner((0..BOARD_SIZE).map(|i| board.rows()[i][i]))
}

fn check_diagonal_down_left(board: &Board) -> Option<Mark> {
    line_owner((0..BOARD_SIZE).map(|i| board.rows()[i][BOARD_SIZE - 1 - i]))
}
