use thiserror::Error;

use crate::network::{Minutes, StationId};

/// Convenient result alias for the fastroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a network is built from matrices with no stations.
    #[error("transit network must contain at least one station")]
    EmptyNetwork,

    /// Raised when a row of a matrix does not match the station count.
    #[error("{matrix} matrix is not square: row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        matrix: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a schedule matrix has a different size to the lengths matrix.
    #[error("{matrix} matrix has {found} rows but the network has {expected} stations")]
    DimensionMismatch {
        matrix: &'static str,
        expected: usize,
        found: usize,
    },

    /// Raised when an edge carries a negative ride length.
    #[error("edge {from} -> {to} has negative length {value}")]
    NegativeLength {
        from: StationId,
        to: StationId,
        value: Minutes,
    },

    /// Raised when an edge carries a negative departure frequency.
    #[error("edge {from} -> {to} has negative frequency {value}")]
    NegativeFrequency {
        from: StationId,
        to: StationId,
        value: Minutes,
    },

    /// Raised when a requested station index is outside the network.
    #[error("{role} station {station} is out of range for a network of {count} stations")]
    StationOutOfRange {
        role: &'static str,
        station: StationId,
        count: usize,
    },

    /// Raised when accumulated travel time no longer fits in [`Minutes`].
    #[error("travel time overflowed while relaxing edges out of station {station}")]
    TimeOverflow { station: StationId },

    /// Wrapper for network file parsing errors.
    #[error("failed to parse transit network: {0}")]
    NetworkParse(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
