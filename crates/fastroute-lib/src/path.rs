use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Edge, Minutes, StationId, TransitNetwork};
use crate::schedule::wait_time;

/// Effective cost of traversing an edge, given the clock at which the
/// traveller is ready to leave the edge's source station. `None` means the
/// cost does not fit in [`Minutes`].
pub trait EdgeCost {
    fn cost(&self, edge: &Edge, clock: Minutes) -> Option<Minutes>;
}

/// Fixed edge weights: only the ride length counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCost;

impl EdgeCost for StaticCost {
    fn cost(&self, edge: &Edge, _clock: Minutes) -> Option<Minutes> {
        Some(edge.length)
    }
}

/// Timetabled edge weights: wait for the next departure, then ride.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduledCost;

impl EdgeCost for ScheduledCost {
    fn cost(&self, edge: &Edge, clock: Minutes) -> Option<Minutes> {
        wait_time(edge.first_departure, edge.frequency, clock)?.checked_add(edge.length)
    }
}

/// Rule for the clock used to look up departures out of a finalized station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockModel {
    /// Departures are looked up at `start_time + tentative[station]`.
    #[default]
    PerStation,
    /// One running clock, seeded with the start time and advanced by the
    /// tentative time of every finalized station. Every edge out of a station
    /// uses the clock value reached right after that station was finalized.
    Shared,
}

impl fmt::Display for ClockModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ClockModel::PerStation => "per-station",
            ClockModel::Shared => "shared",
        };
        f.write_str(value)
    }
}

/// Options controlling a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Clock time at which the traveller is ready at the source station.
    pub start_time: Minutes,
    pub clock: ClockModel,
}

/// Shortest times from one source to every station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestTimes {
    pub source: StationId,
    /// Minutes from the start time; `None` means unreachable.
    pub times: Vec<Option<Minutes>>,
    /// Station the best known path arrived from.
    pub predecessors: Vec<Option<StationId>>,
    /// Stations in the order they were finalized.
    pub finalization_order: Vec<StationId>,
}

impl ShortestTimes {
    /// Shortest time to `station`, or `None` when unreachable or unknown.
    pub fn time_to(&self, station: StationId) -> Option<Minutes> {
        self.times.get(station).copied().flatten()
    }

    /// Stations visited from the source to `target`, both inclusive.
    pub fn path_to(&self, target: StationId) -> Option<Vec<StationId>> {
        self.time_to(target)?;

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(station) = current {
            path.push(station);
            if station == self.source {
                break;
            }
            current = self.predecessors.get(station).copied().flatten();
        }
        path.reverse();
        Some(path)
    }
}

/// Pick the unfinalized, reached station with the smallest tentative time.
///
/// The lowest index wins among equal times. Returns `None` once every reached
/// station has been finalized.
pub fn next_to_finalize(times: &[Option<Minutes>], finalized: &[bool]) -> Option<StationId> {
    let mut best: Option<(StationId, Minutes)> = None;
    for (station, (time, done)) in times.iter().zip(finalized).enumerate() {
        let (Some(time), false) = (*time, *done) else {
            continue;
        };
        if best.map_or(true, |(_, best_time)| time < best_time) {
            best = Some((station, time));
        }
    }
    best.map(|(station, _)| station)
}

/// Run the label-setting search from `source` with the given edge cost.
///
/// Performs at most `station_count - 1` finalizations; the last remaining
/// station has no unfinalized neighbours left to relax.
pub fn search<C>(
    network: &TransitNetwork,
    source: StationId,
    options: &SearchOptions,
    cost: &C,
) -> Result<ShortestTimes>
where
    C: EdgeCost + ?Sized,
{
    network.check_station("source", source)?;

    let count = network.station_count();
    let mut times: Vec<Option<Minutes>> = vec![None; count];
    let mut predecessors: Vec<Option<StationId>> = vec![None; count];
    let mut finalized = vec![false; count];
    let mut finalization_order = Vec::with_capacity(count);
    let mut clock = DepartureClock::new(options);

    times[source] = Some(0);

    for _ in 0..count.saturating_sub(1) {
        let Some(current) = next_to_finalize(&times, &finalized) else {
            break;
        };
        let Some(elapsed) = times[current] else {
            break;
        };
        finalized[current] = true;
        finalization_order.push(current);

        let departure = clock
            .depart_from(elapsed)
            .ok_or(Error::TimeOverflow { station: current })?;
        debug!(station = current, elapsed, departure, "finalized station");

        for edge in network.neighbours(current) {
            let next = edge.target;
            if finalized[next] {
                continue;
            }

            let candidate = cost
                .cost(edge, departure)
                .and_then(|edge_cost| elapsed.checked_add(edge_cost))
                .ok_or(Error::TimeOverflow { station: current })?;
            if times[next].map_or(true, |known| candidate < known) {
                times[next] = Some(candidate);
                predecessors[next] = Some(current);
            }
        }
    }

    Ok(ShortestTimes {
        source,
        times,
        predecessors,
        finalization_order,
    })
}

struct DepartureClock {
    model: ClockModel,
    start: Minutes,
    running: Minutes,
}

impl DepartureClock {
    fn new(options: &SearchOptions) -> Self {
        Self {
            model: options.clock,
            start: options.start_time,
            running: options.start_time,
        }
    }

    /// Clock used for departures out of a station just finalized at `elapsed`.
    fn depart_from(&mut self, elapsed: Minutes) -> Option<Minutes> {
        match self.model {
            ClockModel::PerStation => self.start.checked_add(elapsed),
            ClockModel::Shared => {
                self.running = self.running.checked_add(elapsed)?;
                Some(self.running)
            }
        }
    }
}
