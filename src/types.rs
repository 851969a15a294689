use crate::movegen::Line;

pub type Score = i32;

/// Window sentinel. Far below `i32::MAX`, so negating or comparing any score in
/// `[-SCORE_INFINITY, SCORE_INFINITY]` can never overflow.
pub const SCORE_INFINITY: Score = 32_000;
/// Conventional magnitude for a decided game. Stays under the sentinel so a
/// real win always improves a freshly seeded best score.
pub const SCORE_WIN: Score = 31_000;
pub const SCORE_DRAW: Score = 0;

pub const DEFAULT_MAX_MOVES: usize = 64;
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// What the search does when a non-terminal position generates no moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContractPolicy {
    /// Abort with `SearchError::NoMovesAtNonTerminal`.
    #[default]
    Strict,
    /// Score the position with `Game::evaluate`, as if it were terminal.
    Evaluate,
    /// Return the untouched window sentinel of the node.
    Sentinel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Alpha-beta cutoffs. Disabled means exhaustive minimax.
    pub pruning: bool,
    pub contract_policy: ContractPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            contract_policy: ContractPolicy::Strict,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchResult<M, const D: usize> {
    /// `None` when the root position has no legal move.
    pub best_move: Option<M>,
    pub score: Score,
    pub nodes: u64,
    pub pv: Line<M, D>,
}

/// Seed for a best-score tracker: the worst value for the given side.
#[inline]
pub const fn worst_score(maximizing: bool) -> Score {
    if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY }
}
