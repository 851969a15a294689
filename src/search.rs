use log::{debug, trace, warn};

use crate::error::SearchError;
use crate::game::Game;
use crate::movegen::{Line, MoveList};
use crate::types::{
    worst_score, ContractPolicy, Score, SearchConfig, SearchResult, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_MOVES, SCORE_INFINITY,
};

/// Depth-bounded minimax search w/ alpha-beta pruning over any `Game`.
///
/// `MAX_MOVES` bounds the branching factor and `MAX_DEPTH` the number of plies,
/// which together bound every buffer and the recursion depth of a search.
/// The engine borrows its game, so the game always outlives it, and keeps the
/// diagnostics of its most recent search for `best_score` / `nodes_searched`.
pub struct Minimax<
    'g,
    G: Game,
    const MAX_MOVES: usize = { DEFAULT_MAX_MOVES },
    const MAX_DEPTH: usize = { DEFAULT_MAX_DEPTH },
> {
    game: &'g G,
    config: SearchConfig,
    nodes: u64,
    best_score: Score,
}

impl<'g, G: Game, const MAX_MOVES: usize, const MAX_DEPTH: usize> Minimax<'g, G, MAX_MOVES, MAX_DEPTH> {
    pub fn new(game: &'g G) -> Self {
        Self::with_config(game, SearchConfig::default())
    }

    pub fn with_config(game: &'g G, config: SearchConfig) -> Self {
        const {
            assert!(MAX_MOVES > 0, "MAX_MOVES must be at least 1");
            assert!(MAX_DEPTH > 0, "MAX_DEPTH must be at least 1");
        }
        Self {
            game,
            config,
            nodes: 0,
            best_score: -SCORE_INFINITY,
        }
    }

    pub fn game(&self) -> &'g G {
        self.game
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Score of the move returned by the last search. When the root had no
    /// legal move this is the root player's worst sentinel.
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    /// Alpha-beta nodes visited by the last search. The root is not counted.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Best move for the player to act, or `None` if there is no legal move.
    pub fn find_best_move(&mut self, state: &G::State) -> Result<Option<G::Move>, SearchError> {
        self.search(state).map(|result| result.best_move)
    }

    /// Searches every root move with a full window and keeps the best one.
    ///
    /// Ties go to the move generated first. Diagnostics are reset on entry,
    /// so on error they describe the aborted search.
    pub fn search(&mut self, state: &G::State) -> Result<SearchResult<G::Move, MAX_DEPTH>, SearchError> {
        let maximizing = self.game.is_maximizing_player(state);
        self.nodes = 0;
        self.best_score = worst_score(maximizing);

        let mut moves: MoveList<G::Move, MAX_MOVES> = MoveList::new();
        self.game.generate_moves(state, &mut moves);
        if moves.is_truncated() {
            return Err(SearchError::MoveOverflow { capacity: MAX_MOVES });
        }

        let mut best_move: Option<G::Move> = None;
        let mut pv: Line<G::Move, MAX_DEPTH> = Line::new();
        let mut child_pv: Line<G::Move, MAX_DEPTH> = Line::new();

        for (move_num, mv) in moves.iter().enumerate() {
            let mut child = state.clone();
            self.game.apply_move(&mut child, mv);

            let score = self.alpha_beta(
                &child,
                MAX_DEPTH - 1,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                !maximizing,
                &mut child_pv,
            )?;
            trace!("root move {move_num}: score {score}");

            // The first move is taken even if it only matches the seed, so a
            // position with legal moves never reports `None`.
            let improves = if maximizing {
                score > self.best_score
            } else {
                score < self.best_score
            };
            if best_move.is_none() || improves {
                self.best_score = score;
                best_move = Some(mv.clone());
                splice_line(&mut pv, mv, &mut child_pv);
            }
        }

        debug!(
            "search depth {} moves {} score {} nodes {}",
            MAX_DEPTH,
            moves.len(),
            self.best_score,
            self.nodes
        );

        Ok(SearchResult {
            best_move,
            score: self.best_score,
            nodes: self.nodes,
            pv,
        })
    }

    /// Minimax w/ alpha-beta over an absolute score: the maximizing side raises
    /// alpha, the minimizing side lowers beta, and a node stops once `beta <= alpha`.
    fn alpha_beta(
        &mut self,
        state: &G::State,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        pv: &mut Line<G::Move, MAX_DEPTH>,
    ) -> Result<Score, SearchError> {
        self.nodes += 1;
        pv.clear();

        if depth == 0 || self.game.is_terminal(state) {
            return Ok(self.game.evaluate(state));
        }

        let mut moves: MoveList<G::Move, MAX_MOVES> = MoveList::new();
        self.game.generate_moves(state, &mut moves);
        if moves.is_truncated() {
            return Err(SearchError::MoveOverflow { capacity: MAX_MOVES });
        }

        if moves.is_empty() {
            return match self.config.contract_policy {
                ContractPolicy::Strict => Err(SearchError::NoMovesAtNonTerminal { depth }),
                ContractPolicy::Evaluate => {
                    warn!("non-terminal position without moves, evaluating it ({depth} plies left)");
                    Ok(self.game.evaluate(state))
                }
                ContractPolicy::Sentinel => {
                    warn!("non-terminal position without moves, returning sentinel ({depth} plies left)");
                    Ok(worst_score(maximizing))
                }
            };
        }

        let mut best_score = worst_score(maximizing);
        let mut child_pv: Line<G::Move, MAX_DEPTH> = Line::new();

        for mv in &moves {
            let mut child = state.clone();
            self.game.apply_move(&mut child, mv);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing, &mut child_pv)?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    splice_line(pv, mv, &mut child_pv);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    splice_line(pv, mv, &mut child_pv);
                }
                beta = beta.min(best_score);
            }

            // Beta cutoff at max nodes, alpha cutoff at min nodes
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best_score)
    }
}

/// Replaces `line` with `mv` followed by `tail`, draining `tail`.
fn splice_line<M: Clone, const D: usize>(line: &mut Line<M, D>, mv: &M, tail: &mut Line<M, D>) {
    line.clear();
    if line.try_push(mv.clone()).is_err() {
        return;
    }
    for m in tail.drain(..) {
        if line.try_push(m).is_err() {
            break;
        }
    }
}


// Minimax over an absolute score rather than negamax: `Game::evaluate` always scores
// from the maximizing player's side, so leaves are returned as-is and each node
// keeps a running max or min depending on whose turn it is.

// Every root move is searched with the full window. This keeps each root score exact,
// so pruning can only change the node count, never the chosen move or its score.

// Siblings are explored on clones of the parent state, so no undo logic is needed.
// Stack use per frame is one MoveList<MAX_MOVES> plus one Line<MAX_DEPTH>.
