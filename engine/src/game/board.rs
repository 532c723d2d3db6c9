use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{Action, BOARD_SIZE, Mark};

/// Row-major 3x3 grid. Boards are plain values: every move produces a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn initial_state() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Every cell paired with its coordinates, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Action, Mark)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &mark)| (Action::new(row, col), mark))
        })
    }

    pub(super) fn with_mark(mut self, action: Action, mark: Mark) -> Self {
        self.cells[action.row][action.col] = mark;
        self
    }

    fn row_string(row: &[Mark; BOARD_SIZE]) -> String {
        row.iter().map(|mark| mark.to_char()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    WrongRowCount { found: usize },
    WrongRowWidth { row: usize, found: usize },
    UnknownCell { row: usize, col: usize, found: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::WrongRowCount { found } => {
                write!(f, "Board must have {} rows, found {}", BOARD_SIZE, found)
            }
            BoardParseError::WrongRowWidth { row, found } => {
                write!(f, "Row {} must have {} cells, found {}", row, BOARD_SIZE, found)
            }
            BoardParseError::UnknownCell { row, col, found } => {
                write!(f, "Unknown cell '{}' at ({}, {}), expected X, O or .", found, row, col)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl TryFrom<Vec<String>> for Board {
    type Error = BoardParseError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(BoardParseError::WrongRowWidth { row, found: chars.len() });
            }
            for (col, &c) in chars.iter().enumerate() {
                cells[row][col] = Mark::from_char(c)
                    .ok_or(BoardParseError::UnknownCell { row, col, found: c })?;
            }
        }

        Ok(Self { cells })
    }
}

impl From<Board> for Vec<String> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(Board::row_string).collect()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts three rows separated by newlines or `/`, e.g. `"XO./.X./O.."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<String> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .split(['\n', '/'])
            .map(|row| row.trim_end_matches('\r').to_string())
            .collect();
        Board::try_from(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", Board::row_string(row))?;
        }
        Ok(())
    }
}
