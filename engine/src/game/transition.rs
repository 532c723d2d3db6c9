use super::board::Board;
use super::state::current_player;
use super::types::{Action, InvalidActionError, Mark};

/// Returns the board after the player to move marks `action`. The input board is not modified.
pub fn apply_action(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    let mark = board
        .get(action.row, action.col)
        .ok_or(InvalidActionError::OutOfBounds { action })?;

    if mark != Mark::Empty {
        return Err(InvalidActionError::Occupied { action, mark });
    }

    Ok(board.with_mark(action, current_player(board)))
}
