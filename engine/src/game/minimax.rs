use super::board::Board;
use super::state::{current_player, legal_actions, terminal, utility};
use super::transition::apply_action;
use super::types::{Action, InvalidActionError, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub action: Option<Action>,
    /// Utility of `action` under optimal play, from X's point of view.
    pub value: i32,
    pub stats: SearchStats,
}

struct Candidate {
    action: Action,
    value: i32,
    wins_now: bool,
}

/// Optimal action for the player to move, or `None` when the game is over.
///
/// Among equally valued actions an immediately winning one is taken first, otherwise the
/// earliest in enumeration order. Callers should not rely on which of several equally good
/// non-winning moves comes back.
pub fn minimax(board: &Board) -> Result<Option<Action>, InvalidActionError> {
    Ok(minimax_with_stats(board)?.action)
}

pub fn minimax_with_stats(board: &Board) -> Result<SearchResult, InvalidActionError> {
    let mut searcher = Searcher::default();
    let result = searcher.search_root(board)?;
    Ok(SearchResult { stats: searcher.stats, ..result })
}

pub fn max_value(board: &Board, alpha: i32, beta: i32) -> Result<i32, InvalidActionError> {
    Searcher::default().max_value(board, alpha, beta)
}

pub fn min_value(board: &Board, alpha: i32, beta: i32) -> Result<i32, InvalidActionError> {
    Searcher::default().min_value(board, alpha, beta)
}

#[derive(Default)]
struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    fn search_root(&mut self, board: &Board) -> Result<SearchResult, InvalidActionError> {
        self.stats.nodes += 1;

        if terminal(board) {
            return Ok(SearchResult {
                action: None,
                value: utility(board),
                stats: self.stats,
            });
        }

        let maximizing = current_player(board) == Mark::X;
        let mut candidates = Vec::new();

        for action in legal_actions(board) {
            let next = apply_action(board, action)?;
            // Each root child gets a fresh window.
            let value = if maximizing {
                self.min_value(&next, i32::MIN, i32::MAX)?
            } else {
                self.max_value(&next, i32::MIN, i32::MAX)?
            };
            candidates.push(Candidate {
                action,
                value,
                wins_now: terminal(&next) && utility(&next) != 0,
            });
        }

        let best_value = if maximizing {
            candidates.iter().map(|c| c.value).max()
        } else {
            candidates.iter().map(|c| c.value).min()
        };
        let Some(best_value) = best_value else {
            return Ok(SearchResult { action: None, value: utility(board), stats: self.stats });
        };

        let best = candidates
            .iter()
            .find(|c| c.value == best_value && c.wins_now)
            .or_else(|| candidates.iter().find(|c| c.value == best_value))
            .map(|c| c.action);

        Ok(SearchResult {
            action: best,
            value: best_value,
            stats: self.stats,
        })
    }

    fn max_value(&mut self, board: &Board, mut alpha: i32, beta: i32) -> Result<i32, InvalidActionError> {
        self.stats.nodes += 1;

        if terminal(board) {
            return Ok(utility(board));
        }

        let mut best = i32::MIN;
        for action in legal_actions(board) {
            let next = apply_action(board, action)?;
            best = best.max(self.min_value(&next, alpha, beta)?);
            if best >= beta {
                return Ok(best);
            }
            alpha = alpha.max(best);
        }
        Ok(best)
    }

    fn min_value(&mut self, board: &Board, alpha: i32, mut beta: i32) -> Result<i32, InvalidActionError> {
        self.stats.nodes += 1;

        if terminal(board) {
            return Ok(utility(board));
        }

        let mut best = i32::MAX;
        for action in legal_actions(board) {
            let next = apply_action(board, action)?;
            best = best.min(self.max_value(&next, alpha, beta)?);
            if best <= alpha {
                return Ok(best);
            }
            beta = beta.min(best);
        }
        Ok(best)
    }
}
