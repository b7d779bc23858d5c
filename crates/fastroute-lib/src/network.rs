//! Transit network representation.
//!
//! A network is supplied wholesale as three square matrices indexed by
//! `[from][to]`: ride lengths, first departures and departure frequencies.
//! A zero length means "no edge", so zero-cost edges cannot be expressed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Positional station identifier in `[0, station_count)`.
pub type StationId = usize;

/// Integer minutes. Clock values are minutes from the service epoch.
pub type Minutes = i64;

/// Square matrix indexed by `[from][to]`.
pub type Matrix = Vec<Vec<Minutes>>;

/// Directed edge within the transit network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: StationId,
    pub target: StationId,
    /// Ride duration once boarded.
    pub length: Minutes,
    /// Clock time of the first departure from `source` towards `target`.
    pub first_departure: Minutes,
    /// Minutes between departures; `0` is a single, non-repeating run.
    pub frequency: Minutes,
}

/// Validated transit network used by the search algorithms.
#[derive(Debug, Clone)]
pub struct TransitNetwork {
    adjacency: Vec<Vec<Edge>>,
}

/// On-disk JSON shape of a network. Schedule matrices are optional.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    lengths: Matrix,
    #[serde(default)]
    first: Option<Matrix>,
    #[serde(default)]
    freq: Option<Matrix>,
}

impl TransitNetwork {
    /// Build a network with ride lengths only; every edge departs immediately.
    pub fn from_lengths(lengths: &[Vec<Minutes>]) -> Result<Self> {
        let zeros = zero_matrix(lengths.len());
        Self::from_matrices(lengths, &zeros, &zeros)
    }

    /// Build a schedule-aware network from the three edge matrices.
    pub fn from_matrices(
        lengths: &[Vec<Minutes>],
        first: &[Vec<Minutes>],
        freq: &[Vec<Minutes>],
    ) -> Result<Self> {
        let count = lengths.len();
        if count == 0 {
            return Err(Error::EmptyNetwork);
        }

        check_square("lengths", lengths, count)?;
        check_dimensions("first", first, count)?;
        check_dimensions("freq", freq, count)?;

        let mut adjacency = Vec::with_capacity(count);
        for from in 0..count {
            let mut edges = Vec::new();
            for to in 0..count {
                let length = lengths[from][to];
                if length < 0 {
                    return Err(Error::NegativeLength {
                        from,
                        to,
                        value: length,
                    });
                }
                let frequency = freq[from][to];
                if frequency < 0 {
                    return Err(Error::NegativeFrequency {
                        from,
                        to,
                        value: frequency,
                    });
                }
                if length == 0 {
                    continue;
                }
                edges.push(Edge {
                    source: from,
                    target: to,
                    length,
                    first_departure: first[from][to],
                    frequency,
                });
            }
            adjacency.push(edges);
        }

        debug!(
            stations = count,
            edges = adjacency.iter().map(Vec::len).sum::<usize>(),
            "built transit network"
        );

        Ok(Self { adjacency })
    }

    /// Parse a network from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: NetworkFile = serde_json::from_str(json)?;
        let count = file.lengths.len();
        let first = file.first.unwrap_or_else(|| zero_matrix(count));
        let freq = file.freq.unwrap_or_else(|| zero_matrix(count));
        Self::from_matrices(&file.lengths, &first, &freq)
    }

    /// Load a network from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `station`, ordered by target station.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up the edge `from -> to`, if one exists.
    pub fn edge(&self, from: StationId, to: StationId) -> Option<&Edge> {
        self.neighbours(from).iter().find(|edge| edge.target == to)
    }

    /// Reject station indices outside the network.
    pub fn check_station(&self, role: &'static str, station: StationId) -> Result<()> {
        if station < self.station_count() {
            Ok(())
        } else {
            Err(Error::StationOutOfRange {
                role,
                station,
                count: self.station_count(),
            })
        }
    }
}

fn zero_matrix(count: usize) -> Matrix {
    vec![vec![0; count]; count]
}

fn check_square(matrix: &'static str, rows: &[Vec<Minutes>], expected: usize) -> Result<()> {
    for (row, entries) in rows.iter().enumerate() {
        if entries.len() != expected {
            return Err(Error::NonSquareMatrix {
                matrix,
                row,
                expected,
                found: entries.len(),
            });
        }
    }
    Ok(())
}

fn check_dimensions(matrix: &'static str, rows: &[Vec<Minutes>], expected: usize) -> Result<()> {
    if rows.len() != expected {
        return Err(Error::DimensionMismatch {
            matrix,
            expected,
            found: rows.len(),
        });
    }
    check_square(matrix, rows, expected)
}
