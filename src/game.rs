use crate::movegen::MoveList;
use crate::types::Score;

/// Rules and evaluation of a two-player, zero-sum, turn-based game.
///
/// The engine never looks inside `State` or `Move`; it clones states, hands
/// them back to these methods and compares the resulting scores.
///
/// Implementations must uphold one invariant: if `generate_moves` pushes no
/// move for a state, `is_terminal` must be true for that state. How the search
/// reacts to a violation is chosen by `ContractPolicy`.
pub trait Game {
    /// One complete position. A clone must be fully independent of the original.
    type State: Clone;
    type Move: Clone;

    /// Absolute evaluation: higher is better for the maximizing player,
    /// whoever is to move.
    fn evaluate(&self, state: &Self::State) -> Score;

    /// Pushes the legal moves of the player to act into `moves`.
    ///
    /// The buffer holds `moves.capacity()` entries; pushing more is reported by
    /// the search as `SearchError::MoveOverflow`.
    fn generate_moves<const N: usize>(&self, state: &Self::State, moves: &mut MoveList<Self::Move, N>);

    /// Plays a legal move on `state` in place. Must be deterministic.
    fn apply_move(&self, state: &mut Self::State, mv: &Self::Move);

    /// Game decided (win, loss or draw): search must not descend further.
    fn is_terminal(&self, state: &Self::State) -> bool;

    fn is_maximizing_player(&self, state: &Self::State) -> bool;
}
