use core::ops::Deref;

use arrayvec::ArrayVec;

/// Bounded principal variation: at most one move per ply of search.
pub type Line<M, const D: usize> = ArrayVec<M, D>;

/// Fixed-capacity move buffer filled by `Game::generate_moves`.
///
/// Lives on the stack of each search frame. Pushing past capacity never
/// writes out of bounds: the move is handed back and the buffer remembers it
/// was truncated, which the search reports as `SearchError::MoveOverflow`.
pub struct MoveList<M, const N: usize> {
    moves: ArrayVec<M, N>,
    truncated: bool,
}

impl<M, const N: usize> MoveList<M, N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            moves: ArrayVec::new(),
            truncated: false,
        }
    }

    /// Appends a move. Returns it back as `Err` when the buffer is full.
    #[inline]
    pub fn push(&mut self, mv: M) -> Result<(), M> {
        match self.moves.try_push(mv) {
            Ok(()) => Ok(()),
            Err(err) => {
                self.truncated = true;
                Err(err.element())
            }
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves.is_full()
    }

    /// True once any push was rejected since the last `clear`.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.truncated = false;
    }

    #[inline]
    pub fn as_slice(&self) -> &[M] {
        &self.moves
    }
}

impl<M, const N: usize> Default for MoveList<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, const N: usize> Deref for MoveList<M, N> {
    type Target = [M];

    #[inline]
    fn deref(&self) -> &[M] {
        &self.moves
    }
}

impl<'a, M, const N: usize> IntoIterator for &'a MoveList<M, N> {
    type Item = &'a M;
    type IntoIter = core::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl<M, const N: usize> Extend<M> for MoveList<M, N> {
    /// Pushes every move; extras past capacity are dropped and flag truncation.
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        for mv in iter {
            let _ = self.push(mv);
        }
    }
}

impl<M: core::fmt::Debug, const N: usize> core::fmt::Debug for MoveList<M, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MoveList")
            .field("moves", &self.as_slice())
            .field("truncated", &self.truncated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut moves: MoveList<u8, 4> = MoveList::new();
        assert!(moves.is_empty());
        assert_eq!(moves.push(1), Ok(()));
        assert_eq!(moves.push(2), Ok(()));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves.as_slice(), &[1, 2]);
        assert!(!moves.is_truncated());
        assert_eq!(moves.capacity(), 4);
    }

    #[test]
    fn test_overflow_hands_move_back() {
        let mut moves: MoveList<u8, 2> = MoveList::new();
        moves.push(10).unwrap();
        moves.push(11).unwrap();
        assert!(moves.is_full());
        assert_eq!(moves.push(12), Err(12));
        assert!(moves.is_truncated());
        // Stored moves are untouched by the rejected push
        assert_eq!(moves.as_slice(), &[10, 11]);
    }

    #[test]
    fn test_clear_resets_truncation() {
        let mut moves: MoveList<u8, 1> = MoveList::new();
        moves.extend([1, 2, 3]);
        assert_eq!(moves.len(), 1);
        assert!(moves.is_truncated());
        moves.clear();
        assert!(moves.is_empty());
        assert!(!moves.is_truncated());
    }

    #[test]
    fn test_iteration_keeps_generation_order() {
        let mut moves: MoveList<char, 8> = MoveList::default();
        moves.extend(['c', 'a', 'b']);
        let collected: ArrayVec<char, 8> = moves.iter().copied().collect();
        assert_eq!(collected.as_slice(), &['c', 'a', 'b']);
        let mut count = 0;
        for _ in &moves {
            count += 1;
        }
        assert_eq!(count, 3);
    }
}

// Move lists are stack arrays sized by a const generic, so a whole search needs
// no heap: frame size is MAX_MOVES moves, and frames nest at most MAX_DEPTH deep.
