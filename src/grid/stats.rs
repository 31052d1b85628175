use prettytable::{Cell, Row, Table};

/// Eliminations attributed to each kind of peer group during propagation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitEliminations {
    /// Candidates removed from cells sharing a row with a committed cell.
    pub row: u64,
    /// Candidates removed from cells sharing a column.
    pub column: u64,
    /// Candidates removed from the rest of the 3×3 block.
    pub block: u64,
}

impl UnitEliminations {
    pub fn total(&self) -> u64 {
        self.row + self.column + self.block
    }
}

/// Counters accumulated by a grid over one puzzle instance.
///
/// Cleared by `Grid::initialize` and `Grid::set_preset`; `Grid::reset` only
/// bumps `resets`, since a reset is part of the same run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    /// Successful `set_next_cell` calls.
    pub steps: u64,
    /// `reset` calls since the presets were recorded.
    pub resets: u64,
    /// Full propagation passes, including those run while seeding presets.
    pub propagation_passes: u64,
    /// Eliminations per peer group, summed over all passes.
    pub eliminations: UnitEliminations,
}

pub fn render_stats_table(stats: &RunStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Peer Group"),
        Cell::new("Eliminations"),
        Cell::new("Per Pass"),
    ]));

    let groups = [
        ("Row", stats.eliminations.row),
        ("Column", stats.eliminations.column),
        ("Block", stats.eliminations.block),
        ("Total", stats.eliminations.total()),
    ];

    for (name, eliminations) in groups {
        let per_pass = if stats.propagation_passes > 0 {
            eliminations as f64 / stats.propagation_passes as f64
        } else {
            0.0
        };
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&eliminations.to_string()),
            Cell::new(&format!("{:.2}", per_pass)),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_peer_group() {
        let stats = RunStats {
            steps: 12,
            resets: 1,
            propagation_passes: 16,
            eliminations: UnitEliminations {
                row: 40,
                column: 31,
                block: 9,
            },
        };
        let rendered = render_stats_table(&stats);
        for needle in ["Row", "Column", "Block", "Total", "80"] {
            assert!(rendered.contains(needle), "missing {needle}: {rendered}");
        }
    }

    #[test]
    fn zero_passes_do_not_divide_by_zero() {
        let rendered = render_stats_table(&RunStats::default());
        assert!(rendered.contains("0.00"));
    }
}
