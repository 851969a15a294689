//! Allocation-free minimax search w/ alpha-beta pruning.
//!
//! Describe a two-player, zero-sum, turn-based game by implementing [`Game`],
//! then ask a [`Minimax`] engine for the best move. Branching factor and search
//! depth are const generics, so every buffer lives on the stack and the
//! recursion depth is known at compile time.
//!
//! ```
//! use bounded_minimax::{Game, Minimax, MoveList, Score};
//!
//! // Take 1 or 2 stones; whoever takes the last stone wins.
//! struct Nim;
//!
//! #[derive(Clone)]
//! struct Pile { stones: u8, first_to_move: bool }
//!
//! impl Game for Nim {
//!     type State = Pile;
//!     type Move = u8;
//!
//!     fn evaluate(&self, pile: &Pile) -> Score {
//!         // The side that just moved took the last stone
//!         match (pile.stones, pile.first_to_move) {
//!             (0, true) => -100,
//!             (0, false) => 100,
//!             _ => 0,
//!         }
//!     }
//!
//!     fn generate_moves<const N: usize>(&self, pile: &Pile, moves: &mut MoveList<u8, N>) {
//!         moves.extend((1..=pile.stones.min(2)).rev());
//!     }
//!
//!     fn apply_move(&self, pile: &mut Pile, take: &u8) {
//!         pile.stones -= take;
//!         pile.first_to_move = !pile.first_to_move;
//!     }
//!
//!     fn is_terminal(&self, pile: &Pile) -> bool {
//!         pile.stones == 0
//!     }
//!
//!     fn is_maximizing_player(&self, pile: &Pile) -> bool {
//!         pile.first_to_move
//!     }
//! }
//!
//! let game = Nim;
//! let mut engine: Minimax<Nim, 2, 8> = Minimax::new(&game);
//! // From 4 stones, taking 1 leaves the opponent a lost pile of 3
//! let best = engine.find_best_move(&Pile { stones: 4, first_to_move: true }).unwrap();
//! assert_eq!(best, Some(1));
//! assert_eq!(engine.best_score(), 100);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod game;
pub mod movegen;
pub mod search;
pub mod types;

pub use error::SearchError;
pub use game::Game;
pub use movegen::{Line, MoveList};
pub use search::Minimax;
pub use types::{
    ContractPolicy, Score, SearchConfig, SearchResult, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MOVES,
    SCORE_DRAW, SCORE_INFINITY, SCORE_WIN,
};
