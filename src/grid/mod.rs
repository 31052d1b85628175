//! The 9×9 candidate grid and its stepwise solving algorithm.
//!
//! A [`Grid`] owns 81 [`Cell`]s, each tracking the set of numbers still
//! consistent with the values committed so far. Solving is incremental and
//! externally paced: the driver seeds presets with [`Grid::initialize`] (or
//! supplies its own with [`Grid::set_preset`]), then repeatedly calls
//! [`Grid::set_next_cell`], checking [`Grid::solved`] and [`Grid::deadlock`]
//! between steps. There is no backtracking; the documented recovery from a
//! deadlock is [`Grid::reset`], which restores the recorded preset state.
//!
//! Randomness comes from an injected [`ChaCha8Rng`], so runs with the same
//! seed that hit no deadlocks replay identically.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::error::{GridError, Result};

pub mod cell;
pub mod stats;

pub use cell::Cell;
pub use stats::{render_stats_table, RunStats, UnitEliminations};

/// Side length of the grid.
pub const SIZE: usize = 9;
/// Side length of one block.
pub const BLOCK: usize = 3;
/// Total number of cells.
pub const CELL_COUNT: usize = SIZE * SIZE;

fn index_of(x: usize, y: usize) -> usize {
    y * SIZE + x
}

fn fresh_cells() -> Vec<Cell> {
    (0..CELL_COUNT)
        .map(|i| Cell::new(i % SIZE, i / SIZE))
        .collect()
}

/// A serializable view of one cell, for drivers that render or export state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub x: usize,
    pub y: usize,
    pub candidates: Vec<u8>,
    pub preset: bool,
}

/// The 81-cell grid, the preset record, and the selection/propagation
/// algorithm.
///
/// Cells are stored in a flat row-major vector indexed `y * 9 + x`, so
/// iteration order is always row-major with `y` outer.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    preset: HashSet<usize>,
    initial_values: HashMap<usize, u8>,
    deadlock_count: u64,
    deadlock_count_copy: i64,
    rng: ChaCha8Rng,
    stats: RunStats,
}

impl Grid {
    /// Creates a grid seeded from operating-system entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a grid whose random choices derive from `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a grid with an explicitly constructed random source.
    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            cells: fresh_cells(),
            preset: HashSet::new(),
            initial_values: HashMap::new(),
            deadlock_count: 0,
            deadlock_count_copy: 0,
            rng,
            stats: RunStats::default(),
        }
    }

    /// Seeds a new puzzle with exactly `preset_count` randomly placed givens.
    ///
    /// Clears all cells, the preset record, the deadlock counters, and the
    /// run statistics, then repeatedly picks a uniformly random coordinate,
    /// collapses it to a random remaining candidate, and runs one
    /// propagation pass, until `preset_count` distinct cells are preset.
    ///
    /// Seeding never picks an illegal candidate for the chosen cell, but it
    /// can still drive *other* cells to zero candidates; that is not detected
    /// here. Callers must check [`deadlock`](Grid::deadlock) before solving.
    pub fn initialize(&mut self, preset_count: usize) -> Result<()> {
        if preset_count > CELL_COUNT {
            return Err(GridError::TooManyPresets {
                requested: preset_count,
                total: CELL_COUNT,
            }
            .into());
        }

        self.cells = fresh_cells();
        self.preset.clear();
        self.initial_values.clear();
        self.deadlock_count = 0;
        self.deadlock_count_copy = 0;
        self.stats = RunStats::default();

        while self.preset.len() < preset_count {
            let x = self.rng.gen_range(0..SIZE);
            let y = self.rng.gen_range(0..SIZE);
            let i = index_of(x, y);
            if self.preset.contains(&i) {
                continue;
            }
            self.cells[i].collapse_random(&mut self.rng)?;
            self.propagate_constraints();
            let value = self.cells[i].candidates()[0];
            self.preset.insert(i);
            self.initial_values.insert(i, value);
            debug!(x, y, value, "seeded preset cell");
        }

        Ok(())
    }

    /// Installs an externally authored puzzle as the preset state.
    ///
    /// Records each `((x, y), value)` pair as a preset with its initial
    /// value, rebuilds the grid from that record, and zeroes the deadlock
    /// counters and run statistics. No propagation runs here; no validation
    /// is applied to the supplied values (a contradictory preset will show up
    /// as a deadlock after the next propagation).
    pub fn set_preset<I>(&mut self, presets: I)
    where
        I: IntoIterator<Item = ((usize, usize), u8)>,
    {
        self.preset.clear();
        self.initial_values.clear();
        for ((x, y), value) in presets {
            let i = index_of(x, y);
            self.preset.insert(i);
            self.initial_values.insert(i, value);
        }
        self.reset();
        self.deadlock_count = 0;
        self.deadlock_count_copy = 0;
        self.stats = RunStats::default();
    }

    /// Restores the grid to the last recorded preset state.
    ///
    /// All 81 cells are rebuilt with full candidate sets, then only the
    /// recorded initial values are re-applied. Propagation is *not* re-run:
    /// until the next step, non-preset cells present full candidate sets.
    /// The deadlock counters survive a reset, which is what makes a recovery
    /// run choose differently than the run that deadlocked.
    pub fn reset(&mut self) {
        self.cells = fresh_cells();
        for (&i, &value) in &self.initial_values {
            self.cells[i].collapse_to(value);
        }
        self.stats.resets += 1;
        debug!(presets = self.initial_values.len(), "grid reset to preset state");
    }

    /// Advances solving by one committed cell.
    ///
    /// Scans all cells in row-major order and selects the uncommitted cell
    /// with the fewest remaining candidates (the fail-first
    /// minimum-remaining-values heuristic; ties go to the first in scan
    /// order). The selected cell is collapsed via the pick-index path using
    /// the current deadlock-counter copy, which is then decremented, and one
    /// propagation pass runs.
    ///
    /// Fails with [`GridError::NoNextCell`] when every cell is committed, and
    /// with [`GridError::EmptyDomain`] when the selected cell has zero
    /// candidates — both are contract violations; callers must check
    /// [`solved`](Grid::solved) and [`deadlock`](Grid::deadlock) first.
    pub fn set_next_cell(&mut self) -> Result<()> {
        let mut next: Option<usize> = None;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.len() == 1 {
                continue;
            }
            let better = match next {
                None => true,
                Some(j) => cell.len() < self.cells[j].len(),
            };
            if better {
                next = Some(i);
            }
        }

        let Some(i) = next else {
            return Err(GridError::NoNextCell.into());
        };

        let pick = self.deadlock_count_copy;
        self.deadlock_count_copy -= 1;
        self.cells[i].collapse_at(pick)?;
        self.stats.steps += 1;
        debug!(
            x = self.cells[i].x(),
            y = self.cells[i].y(),
            value = self.cells[i].candidates()[0],
            pick,
            "collapsed next cell"
        );
        self.propagate_constraints();
        Ok(())
    }

    /// Runs one full propagation pass and returns how many candidates it
    /// eliminated.
    ///
    /// For every committed cell, its value is removed from every other cell
    /// in the same row, every other cell in the same column, and the cells of
    /// its 3×3 block that share neither its row nor its column (those are
    /// covered by the row and column passes). This is a single pass over all
    /// 81 cells, not a fixed-point iteration; it must be re-run after each
    /// collapse.
    pub fn propagate_constraints(&mut self) -> u64 {
        let mut pass = UnitEliminations::default();

        for y in 0..SIZE {
            for x in 0..SIZE {
                let i = index_of(x, y);
                if self.cells[i].len() != 1 {
                    continue;
                }
                let value = self.cells[i].candidates()[0];

                for x0 in 0..SIZE {
                    if x0 == x {
                        continue;
                    }
                    pass.row += self.eliminate_at(x0, y, value);
                }

                for y0 in 0..SIZE {
                    if y0 == y {
                        continue;
                    }
                    pass.column += self.eliminate_at(x, y0, value);
                }

                let bx = x / BLOCK * BLOCK;
                let by = y / BLOCK * BLOCK;
                for x1 in bx..bx + BLOCK {
                    for y1 in by..by + BLOCK {
                        if x1 == x || y1 == y {
                            continue;
                        }
                        pass.block += self.eliminate_at(x1, y1, value);
                    }
                }
            }
        }

        self.stats.propagation_passes += 1;
        self.stats.eliminations.row += pass.row;
        self.stats.eliminations.column += pass.column;
        self.stats.eliminations.block += pass.block;

        let eliminated = pass.total();
        debug!(eliminated, "propagation pass complete");
        eliminated
    }

    fn eliminate_at(&mut self, x: usize, y: usize, value: u8) -> u64 {
        let cell = &mut self.cells[index_of(x, y)];
        let before = cell.len();
        cell.eliminate(value);
        (before - cell.len()) as u64
    }

    /// Returns `true` iff every cell is committed to a single value.
    pub fn solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Returns `true` iff any cell has zero candidates.
    ///
    /// Not a pure query: each observation of a deadlocked grid increments the
    /// deadlock counter and refreshes the working copy used as the pick index
    /// by [`set_next_cell`](Grid::set_next_cell).
    pub fn deadlock(&mut self) -> bool {
        if self.cells.iter().any(Cell::is_empty) {
            self.deadlock_count += 1;
            self.deadlock_count_copy = self.deadlock_count as i64;
            return true;
        }
        false
    }

    /// How often a deadlock has been observed since the presets were set.
    pub fn deadlock_count(&self) -> u64 {
        self.deadlock_count
    }

    /// The cell at `(x, y)`. Coordinates must be in `[0, 9)`.
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[index_of(x, y)]
    }

    /// Returns `true` if the cell at `(x, y)` was fixed as part of the
    /// initial puzzle rather than by the solving algorithm.
    pub fn is_preset(&self, x: usize, y: usize) -> bool {
        self.preset.contains(&index_of(x, y))
    }

    /// Number of preset cells.
    pub fn preset_count(&self) -> usize {
        self.preset.len()
    }

    /// The recorded initial value of the cell at `(x, y)`, if it is preset.
    pub fn initial_value(&self, x: usize, y: usize) -> Option<u8> {
        self.initial_values.get(&index_of(x, y)).copied()
    }

    /// Iterates over all 81 cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// A serializable row-major view of every cell.
    pub fn snapshot(&self) -> Vec<CellSnapshot> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| CellSnapshot {
                x: cell.x(),
                y: cell.y(),
                candidates: cell.candidates().to_vec(),
                preset: self.preset.contains(&i),
            })
            .collect()
    }

    /// Counters accumulated since the presets were recorded.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
