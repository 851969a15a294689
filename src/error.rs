use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("move generator produced more moves than the buffer capacity of {capacity}")]
    MoveOverflow { capacity: usize },
    #[error("non-terminal position generated no moves ({depth} plies left)")]
    NoMovesAtNonTerminal { depth: usize },
}
