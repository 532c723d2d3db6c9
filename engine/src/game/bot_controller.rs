use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::SessionRng;
use super::board::Board;
use super::minimax::minimax;
use super::state::{legal_actions, terminal};
use super::types::{Action, InvalidActionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Minimax,
    Random,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    rng: &mut SessionRng,
) -> Result<Option<Action>, InvalidActionError> {
    match bot_type {
        BotType::Minimax => minimax(board),
        BotType::Random => Ok(calculate_random_move(board, rng)),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Action> {
    if terminal(board) {
        return None;
    }
    let available_moves: Vec<Action> = legal_actions(board).into_iter().collect();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
