//! Nonet generates and incrementally solves 9×9 Sudoku grids with a
//! constraint-propagation algorithm.
//!
//! The core idea is a grid of 81 cells, each owning the set of numbers still
//! consistent with the values placed so far. Solving advances one cell at a
//! time: the grid picks the uncommitted cell with the fewest remaining
//! candidates (the minimum-remaining-values heuristic), collapses it to one
//! value, and propagates the consequence to every peer sharing its row,
//! column, or 3×3 block.
//!
//! There is deliberately no backtracking search. The algorithm can paint
//! itself into a corner — some cell ends up with zero candidates — and that
//! state is a first-class observable called a *deadlock*, not an error. The
//! documented recovery is [`Grid::reset`], which restores the last recorded
//! preset state; the same presets may deadlock again, which is accepted.
//!
//! # Core Concepts
//!
//! - **[`Cell`]**: the candidate-set state for one position, with collapse
//!   and eliminate operations.
//! - **[`Grid`]**: the 81-cell collection, the preset record, and the
//!   selection + propagation algorithm. Randomness comes from an injected
//!   seedable source, so runs with the same seed replay identically until
//!   the first deadlock.
//! - **Driving loop**: the caller paces steps externally, checking
//!   [`Grid::solved`] and [`Grid::deadlock`] between calls to
//!   [`Grid::set_next_cell`].
//!
//! # Example
//!
//! ```
//! use nonet::grid::Grid;
//!
//! let mut grid = Grid::from_seed(42);
//! grid.initialize(4)?;
//!
//! assert_eq!(grid.preset_count(), 4);
//! assert!(!grid.solved());
//! assert!(!grid.deadlock());
//!
//! // Every cell exposes its position and remaining candidates, in
//! // row-major order.
//! for cell in &grid {
//!     assert!(cell.len() <= 9);
//!     if grid.is_preset(cell.x(), cell.y()) {
//!         assert_eq!(cell.string_value(), cell.value()?.to_string());
//!     }
//! }
//!
//! // Advance one committed cell and re-propagate.
//! grid.set_next_cell()?;
//! # Ok::<(), nonet::error::Error>(())
//! ```
//!
//! [`Cell`]: grid::Cell
//! [`Grid`]: grid::Grid
//! [`Grid::solved`]: grid::Grid::solved
//! [`Grid::deadlock`]: grid::Grid::deadlock
//! [`Grid::set_next_cell`]: grid::Grid::set_next_cell
//! [`Grid::reset`]: grid::Grid::reset

pub mod error;
pub mod grid;
