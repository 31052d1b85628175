use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised by grid operations.
///
/// All of these are contract violations: the caller invoked an operation
/// outside its precondition. Deadlock is deliberately *not* an error; it is
/// an observable state reported by [`Grid::deadlock`](crate::grid::Grid::deadlock)
/// and recovered from with [`Grid::reset`](crate::grid::Grid::reset).
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A collapse was requested on a cell whose candidate set is empty.
    /// The caller must check `Grid::deadlock` before stepping.
    #[error("cell ({x}, {y}) has no remaining candidates")]
    EmptyDomain { x: usize, y: usize },

    /// `Cell::value` was read on a cell that is not committed to a single
    /// number. Callers must check `Cell::len` first.
    #[error("cell ({x}, {y}) is not committed to a single value")]
    NotCommitted { x: usize, y: usize },

    /// `Grid::set_next_cell` was invoked with every cell already committed.
    /// The caller must ensure `Grid::solved` is false before stepping.
    #[error("no uncommitted cell remains to collapse")]
    NoNextCell,

    /// More presets were requested than the grid has cells.
    #[error("preset count {requested} exceeds the {total} cells of the grid")]
    TooManyPresets { requested: usize, total: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<GridError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The underlying [`GridError`], for callers that match on the kind.
    pub fn grid_error(&self) -> &GridError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<GridError> for Error {
    fn from(inner: GridError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
