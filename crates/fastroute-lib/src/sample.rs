//! Nine-station sample network.
//!
//! Used as the CLI default network, in tests and in benchmarks. Times are
//! minutes from the morning service epoch.

use crate::error::Result;
use crate::network::{Matrix, TransitNetwork};

/// Ride lengths; `lengths[u][v] == 0` means there is no edge.
pub fn lengths() -> Matrix {
    vec![
        vec![0, 4, 0, 0, 0, 0, 0, 8, 0],
        vec![4, 0, 8, 0, 0, 0, 0, 11, 0],
        vec![0, 8, 0, 7, 0, 4, 0, 0, 2],
        vec![0, 0, 7, 0, 9, 14, 0, 0, 0],
        vec![0, 0, 0, 9, 0, 10, 0, 0, 0],
        vec![0, 0, 4, 14, 10, 0, 2, 0, 0],
        vec![0, 0, 0, 0, 0, 2, 0, 1, 6],
        vec![8, 11, 0, 0, 0, 0, 1, 0, 7],
        vec![0, 0, 2, 0, 0, 0, 6, 7, 0],
    ]
}

/// First departure from `u` towards `v`.
pub fn first_departures() -> Matrix {
    vec![
        vec![0, 6, 0, 0, 0, 0, 0, 11, 0],
        vec![15, 0, 18, 0, 0, 0, 0, 9, 0],
        vec![0, 15, 0, 22, 0, 23, 0, 0, 8],
        vec![0, 0, 17, 0, 19, 14, 0, 0, 0],
        vec![0, 0, 0, 9, 0, 17, 0, 0, 0],
        vec![0, 0, 14, 16, 17, 0, 12, 0, 0],
        vec![0, 0, 0, 0, 0, 15, 0, 11, 7],
        vec![18, 13, 0, 0, 0, 0, 11, 0, 7],
        vec![0, 0, 11, 0, 0, 0, 14, 17, 0],
    ]
}

/// Minutes between departures from `u` towards `v`.
pub fn frequencies() -> Matrix {
    vec![
        vec![0, 3, 0, 0, 0, 0, 0, 8, 0],
        vec![11, 0, 19, 0, 0, 0, 0, 7, 0],
        vec![0, 16, 0, 22, 0, 23, 0, 0, 10],
        vec![0, 0, 15, 0, 11, 14, 0, 0, 0],
        vec![0, 0, 0, 19, 0, 17, 0, 0, 0],
        vec![0, 0, 15, 14, 13, 0, 8, 0, 0],
        vec![0, 0, 0, 0, 0, 14, 0, 14, 6],
        vec![20, 13, 0, 0, 0, 0, 10, 0, 9],
        vec![0, 0, 11, 0, 0, 0, 17, 18, 0],
    ]
}

/// The sample network with its full timetable.
pub fn network() -> Result<TransitNetwork> {
    TransitNetwork::from_matrices(&lengths(), &first_departures(), &frequencies())
}
