mod board;
mod bot_controller;
mod minimax;
mod state;
mod transition;
mod types;
mod win_detector;

pub use board::{Board, BoardParseError};
pub use bot_controller::{BotType, calculate_move};
pub use minimax::{SearchResult, SearchStats, max_value, min_value, minimax, minimax_with_stats};
pub use state::{count_marks, current_player, game_status, legal_actions, terminal, utility, winner};
pub use transition::apply_action;
pub use types::{Action, BOARD_SIZE, GameStatus, InvalidActionError, Mark, MarkCounts};
pub use win_detector::{WinningLine, check_win, check_win_with_line};
