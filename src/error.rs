use core::fmt;

/// Failure conditions across the grid, queue and search surfaces.
///
/// [NoPath](Error::NoPath) is an ordinary search outcome rather than a
/// defect; the queue variants signal a fatal capacity condition or a caller
/// error. The boolean [find](crate::AstarSearch::find) surface collapses all
/// of these to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The grid has no cells.
    EmptyGrid,
    /// No start marker has been set on the grid.
    NoStart,
    /// No end marker has been set on the grid.
    NoEnd,
    /// A coordinate lies outside the grid.
    OutOfBounds,
    /// The open set emptied without reaching the end cell.
    NoPath,
    /// The queue is full and already at its maximum capacity.
    QueueCapacity,
    /// Copy bounds do not fit the queue contents.
    QueueBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            Error::EmptyGrid => "grid has no cells",
            Error::NoStart => "grid has no start marker",
            Error::NoEnd => "grid has no end marker",
            Error::OutOfBounds => "coordinate outside the grid",
            Error::NoPath => "no path between start and end",
            Error::QueueCapacity => "priority queue exceeded maximum capacity",
            Error::QueueBounds => "copy bounds exceed queue contents",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for Error {}
