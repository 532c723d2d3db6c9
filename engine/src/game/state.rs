use std::collections::BTreeSet;

use super::board::Board;
use super::types::{Action, GameStatus, Mark, MarkCounts};
use super::win_detector::check_win;

pub fn count_marks(board: &Board) -> MarkCounts {
    board
        .iter_cells()
        .fold(MarkCounts::default(), |mut counts, (_, mark)| {
            match mark {
                Mark::X => counts.x += 1,
                Mark::O => counts.o += 1,
                Mark::Empty => counts.empty += 1,
            }
            counts
        })
}

/// X moves first and turns alternate. A full board, or counts that no legal game can
/// produce, fall back to X.
pub fn current_player(board: &Board) -> Mark {
    let counts = count_marks(board);
    if counts.empty != 0 && counts.x == counts.o + 1 {
        return Mark::O;
    }
    Mark::X
}

/// Empty cells as a set. Iteration happens to be row-major; nothing should depend on it.
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    board
        .iter_cells()
        .filter(|&(_, mark)| mark == Mark::Empty)
        .map(|(action, _)| action)
        .collect()
}

pub fn winner(board: &Board) -> Option<Mark> {
    check_win(board)
}

pub fn terminal(board: &Board) -> bool {
    count_marks(board).empty == 0 || winner(board).is_some()
}

/// +1 when X has won, -1 when O has won, 0 otherwise. Non-terminal boards score 0.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        _ if terminal(board) => GameStatus::Draw,
        _ => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::transition::apply_action;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&Board::initial_state()), Mark::X);
    }

    #[test]
    fn test_current_player_alternates_along_a_game() {
        let mut state = Board::initial_state();
        let mut expected = Mark::X;
        for action in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2)] {
            assert_eq!(current_player(&state), expected);
            state = apply_action(&state, Action::from(action)).unwrap();
            expected = expected.opponent().unwrap();
        }
    }

    #[test]
    fn test_current_player_fallbacks() {
        assert_eq!(current_player(&board("XOX/XOO/OXX")), Mark::X);
        assert_eq!(current_player(&board("XX./.../...")), Mark::X);
        assert_eq!(current_player(&board("OO./.../...")), Mark::X);
    }

    #[test]
    fn test_legal_actions_match_empty_cells() {
        for text in [".../.../...", "XO./.X./O..", "XOX/XOO/OXX", "X../.../..."] {
            let state = board(text);
            let actions = legal_actions(&state);
            assert_eq!(actions.len(), count_marks(&state).empty);
            assert!(actions.iter().all(|a| state.get(a.row, a.col) == Some(Mark::Empty)));
        }
    }

    #[test]
    fn test_legal_actions_on_sample_board() {
        let actions: Vec<Action> = legal_actions(&board("XO./.X./O..")).into_iter().collect();
        assert_eq!(
            actions,
            vec![
                Action::new(0, 2),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_terminal_iff_no_actions_or_winner() {
        for text in [".../.../...", "XXX/OO./...", "XOX/XOO/OXX", "XO./.X./O..", "XOX/OXO/OXX"] {
            let state = board(text);
            assert_eq!(
                terminal(&state),
                legal_actions(&state).is_empty() || winner(&state).is_some(),
                "board {}",
                text
            );
        }
        assert!(terminal(&board("XXX/OO./...")));
        assert!(!terminal(&board("XO./.X./O..")));
    }

    #[test]
    fn test_utility() {
        assert_eq!(utility(&board("XXX/OO./...")), 1);
        assert_eq!(utility(&board("XX./OOO/X..")), -1);
        assert_eq!(utility(&board("XOX/XOO/OXX")), 0);
        assert_eq!(utility(&board("XO./.X./O..")), 0);
    }

    #[test]
    fn test_game_status() {
        assert_eq!(game_status(&Board::initial_state()), GameStatus::InProgress);
        assert_eq!(game_status(&board("XXX/OO./...")), GameStatus::XWon);
        assert_eq!(game_status(&board("XX./OOO/X..")), GameStatus::OWon);
        assert_eq!(game_status(&board("XOX/XOO/OXX")), GameStatus::Draw);
    }
}
