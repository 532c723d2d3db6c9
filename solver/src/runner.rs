use tictactoe_engine::SessionRng;
use tictactoe_engine::game::{
    Action, Board, BotType, GameStatus, InvalidActionError, Mark, apply_action, calculate_move,
    check_win_with_line, current_player, game_status, minimax_with_stats,
};
use tictactoe_engine::log;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<(Mark, Action)>,
    pub final_board: Board,
    pub status: GameStatus,
}

pub fn solve(board: &Board) -> Result<Option<Action>, InvalidActionError> {
    log!("Solving for {} on board:\n{}", current_player(board), board);

    let result = minimax_with_stats(board)?;
    match result.action {
        Some(action) => log!(
            "Optimal move for {}: {} (value {}, {} nodes searched)",
            current_player(board),
            action,
            result.value,
            result.stats.nodes
        ),
        None => log!("Board is terminal: {}", game_status(board)),
    }

    Ok(result.action)
}

/// Plays from `board` until the game ends. X is the minimax bot, O is `opponent`.
pub fn play(board: Board, opponent: BotType, rng: &mut SessionRng) -> Result<GameRecord, InvalidActionError> {
    log!("Starting game: X = {:?}, O = {:?}, seed {}", BotType::Minimax, opponent, rng.seed());

    let mut board = board;
    let mut moves = Vec::new();

    loop {
        let mover = current_player(&board);
        let bot = if mover == Mark::X { BotType::Minimax } else { opponent };
        let Some(action) = calculate_move(bot, &board, rng)? else {
            break;
        };
        board = apply_action(&board, action)?;
        moves.push((mover, action));
        log!("{} plays {}:\n{}", mover, action, board);
    }

    let status = game_status(&board);
    match check_win_with_line(&board) {
        Some(line) => log!("Game over: {} ({} to {})", status, line.start, line.end),
        None => log!("Game over: {}", status),
    }

    Ok(GameRecord {
        moves,
        final_board: board,
        status,
    })
}
