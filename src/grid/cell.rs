use rand::Rng;

use crate::error::{GridError, Result};

/// The candidate-set state for a single grid position.
///
/// A cell starts with all nine numbers as candidates. Candidates only ever
/// leave the set (via [`eliminate`](Cell::eliminate) or one of the collapse
/// operations); they are never reordered and never re-added. Once the set has
/// shrunk to a single number, that number is the cell's committed value.
///
/// A committed cell can still lose its last candidate through `eliminate` —
/// that is the deadlock condition, detected at the grid level rather than
/// prevented here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    candidates: Vec<u8>,
}

impl Cell {
    /// Creates a fresh cell at `(x, y)` with all nine candidates.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            candidates: (1..=9).collect(),
        }
    }

    /// Column coordinate, in `[0, 9)`.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row coordinate, in `[0, 9)`.
    pub fn y(&self) -> usize {
        self.y
    }

    /// The numbers not yet ruled out for this cell, in their remaining order.
    pub fn candidates(&self) -> &[u8] {
        &self.candidates
    }

    /// The number of remaining candidates, in `[0, 9]`.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the candidate set is empty (the deadlock condition).
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns `true` if exactly one candidate remains.
    pub fn is_committed(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The committed value.
    ///
    /// Fails with [`GridError::NotCommitted`] unless exactly one candidate
    /// remains; callers must check [`len`](Cell::len) first.
    pub fn value(&self) -> Result<u8> {
        match self.candidates[..] {
            [value] => Ok(value),
            _ => Err(GridError::NotCommitted {
                x: self.x,
                y: self.y,
            }
            .into()),
        }
    }

    /// The committed value as text, or the empty string while uncommitted.
    pub fn string_value(&self) -> String {
        match self.candidates[..] {
            [value] => value.to_string(),
            _ => String::new(),
        }
    }

    /// Collapses the candidate set to exactly `[value]`.
    ///
    /// There is no validation that `value` was previously a candidate; this
    /// is a trust contract with the caller, used when applying presets and
    /// when restoring recorded initial values.
    pub fn collapse_to(&mut self, value: u8) {
        self.candidates.clear();
        self.candidates.push(value);
    }

    /// Collapses to the candidate at `pick mod len`, clamped to the first
    /// candidate for negative picks.
    ///
    /// The pick index is how the grid turns its decrementing deadlock counter
    /// into a deterministic, replayable choice among the remaining
    /// candidates. Fails with [`GridError::EmptyDomain`] when no candidates
    /// remain.
    pub fn collapse_at(&mut self, pick: i64) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(self.empty_domain());
        }
        let slot = (pick % self.candidates.len() as i64).max(0) as usize;
        let value = self.candidates[slot];
        self.collapse_to(value);
        Ok(())
    }

    /// Collapses to a candidate chosen uniformly at random.
    ///
    /// Fails with [`GridError::EmptyDomain`] when no candidates remain.
    pub fn collapse_random<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(self.empty_domain());
        }
        let slot = rng.gen_range(0..self.candidates.len());
        let value = self.candidates[slot];
        self.collapse_to(value);
        Ok(())
    }

    /// Removes `value` from the candidate set if present; no-op otherwise.
    ///
    /// Eliminating from an already-committed cell is allowed and can drive
    /// the set to zero candidates.
    pub fn eliminate(&mut self, value: u8) {
        if let Some(slot) = self.candidates.iter().position(|&c| c == value) {
            self.candidates.remove(slot);
        }
    }

    fn empty_domain(&self) -> crate::error::Error {
        GridError::EmptyDomain {
            x: self.x,
            y: self.y,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::error::GridError;

    #[test]
    fn fresh_cell_has_all_nine_candidates() {
        let cell = Cell::new(3, 7);
        assert_eq!(cell.candidates(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(cell.len(), 9);
        assert!(!cell.is_committed());
        assert_eq!((cell.x(), cell.y()), (3, 7));
    }

    #[test]
    fn collapse_to_replaces_candidates_without_validation() {
        let mut cell = Cell::new(0, 0);
        cell.eliminate(5);
        // 5 is no longer a candidate, but collapse_to trusts the caller.
        cell.collapse_to(5);
        assert_eq!(cell.candidates(), &[5]);
        assert_eq!(cell.value().unwrap(), 5);
    }

    #[test]
    fn collapse_at_wraps_pick_modulo_length() {
        let mut cell = Cell::new(0, 0);
        // 10 % 9 == 1, the second remaining candidate.
        cell.collapse_at(10).unwrap();
        assert_eq!(cell.value().unwrap(), 2);
    }

    #[test]
    fn collapse_at_negative_pick_clamps_to_first_candidate() {
        let mut cell = Cell::new(0, 0);
        cell.eliminate(1);
        cell.collapse_at(-17).unwrap();
        assert_eq!(cell.value().unwrap(), 2);
    }

    #[test]
    fn collapse_at_empty_domain_is_an_error() {
        let mut cell = Cell::new(4, 2);
        for value in 1..=9 {
            cell.eliminate(value);
        }
        let err = cell.collapse_at(0).unwrap_err();
        assert!(matches!(
            err.grid_error(),
            GridError::EmptyDomain { x: 4, y: 2 }
        ));
    }

    #[test]
    fn collapse_random_picks_a_remaining_candidate() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cell = Cell::new(0, 0);
        cell.eliminate(1);
        cell.eliminate(2);
        cell.collapse_random(&mut rng).unwrap();
        let value = cell.value().unwrap();
        assert!((3..=9).contains(&value));
        assert_eq!(cell.len(), 1);
    }

    #[test]
    fn collapse_random_empty_domain_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cell = Cell::new(1, 8);
        for value in 1..=9 {
            cell.eliminate(value);
        }
        let err = cell.collapse_random(&mut rng).unwrap_err();
        assert!(matches!(
            err.grid_error(),
            GridError::EmptyDomain { x: 1, y: 8 }
        ));
    }

    #[test]
    fn eliminate_missing_value_is_a_noop() {
        let mut cell = Cell::new(0, 0);
        cell.eliminate(4);
        cell.eliminate(4);
        assert_eq!(cell.candidates(), &[1, 2, 3, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn eliminate_preserves_candidate_order() {
        let mut cell = Cell::new(0, 0);
        cell.eliminate(1);
        cell.eliminate(9);
        cell.eliminate(5);
        assert_eq!(cell.candidates(), &[2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn eliminate_can_empty_a_committed_cell() {
        let mut cell = Cell::new(0, 0);
        cell.collapse_to(7);
        cell.eliminate(7);
        assert!(cell.is_empty());
    }

    #[test]
    fn string_value_is_empty_until_committed() {
        let mut cell = Cell::new(0, 0);
        assert_eq!(cell.string_value(), "");
        cell.collapse_to(3);
        assert_eq!(cell.string_value(), "3");
    }

    #[test]
    fn value_on_uncommitted_cell_is_an_error() {
        let cell = Cell::new(6, 1);
        let err = cell.value().unwrap_err();
        assert!(matches!(
            err.grid_error(),
            GridError::NotCommitted { x: 6, y: 1 }
        ));
    }
}
