//! Travel planning entry points.
//!
//! This module provides:
//! - [`shortest_time`] - fixed-weight shortest times from one station to all others
//! - [`travel_time`] - schedule-aware travel time between two stations
//! - [`plan_travel`] - the same search, returning the station path and legs
//!
//! All searches share the relaxation loop in [`crate::path`]; the
//! [`RouteMode`] picks the edge-cost strategy plugged into it.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::network::{Minutes, StationId, TransitNetwork};
use crate::output::TimesReport;
use crate::path::{
    search, ClockModel, EdgeCost, ScheduledCost, SearchOptions, ShortestTimes, StaticCost,
};

/// Edge weighting used by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Ride lengths only, trains leave the moment you arrive.
    Static,
    /// Wait for the next scheduled departure, then ride.
    #[default]
    Scheduled,
}

impl RouteMode {
    fn edge_cost(self) -> &'static dyn EdgeCost {
        match self {
            RouteMode::Static => &StaticCost,
            RouteMode::Scheduled => &ScheduledCost,
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteMode::Static => "static",
            RouteMode::Scheduled => "scheduled",
        };
        f.write_str(value)
    }
}

/// Travel query between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRequest {
    pub source: StationId,
    pub target: StationId,
    /// Clock time at which the traveller is ready at `source`.
    pub start_time: Minutes,
    pub clock: ClockModel,
    pub mode: RouteMode,
}

impl TravelRequest {
    /// Schedule-aware request using the per-station clock.
    pub fn new(source: StationId, target: StationId, start_time: Minutes) -> Self {
        Self {
            source,
            target,
            start_time,
            clock: ClockModel::default(),
            mode: RouteMode::default(),
        }
    }

    /// Use the given clock model for departure lookups.
    pub fn with_clock(mut self, clock: ClockModel) -> Self {
        self.clock = clock;
        self
    }

    /// Use the given edge weighting.
    pub fn with_mode(mut self, mode: RouteMode) -> Self {
        self.mode = mode;
        self
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            start_time: self.start_time,
            clock: self.clock,
        }
    }
}

/// One ride between adjacent stations of a planned journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub from: StationId,
    pub to: StationId,
    /// Clock time the traveller is ready at `from`.
    pub ready_at: Minutes,
    pub wait: Minutes,
    pub ride: Minutes,
    /// Clock time the traveller reaches `to`.
    pub arrive_at: Minutes,
}

impl Leg {
    /// Clock time the boarded train leaves `from`.
    pub fn departs_at(&self) -> Minutes {
        self.arrive_at - self.ride
    }
}

/// Result of a travel query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelPlan {
    pub mode: RouteMode,
    pub clock: ClockModel,
    pub source: StationId,
    pub target: StationId,
    pub start_time: Minutes,
    /// Minutes from the start time to arrival at the target, `None` if unreachable.
    pub total: Option<Minutes>,
    pub stations: Vec<StationId>,
    pub legs: Vec<Leg>,
}

impl TravelPlan {
    /// Number of rides in the journey.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Total minutes spent waiting on platforms.
    pub fn total_wait(&self) -> Minutes {
        self.legs.iter().map(|leg| leg.wait).sum()
    }
}

/// Fixed-weight shortest times from `source` to every station.
pub fn shortest_times(network: &TransitNetwork, source: StationId) -> Result<ShortestTimes> {
    search(network, source, &SearchOptions::default(), &StaticCost)
}

/// Fixed-weight shortest times from `source`, packaged as a printable report.
pub fn shortest_time(network: &TransitNetwork, source: StationId) -> Result<TimesReport> {
    let times = shortest_times(network, source)?;
    info!(
        source,
        reached = times.times.iter().filter(|time| time.is_some()).count(),
        "computed shortest times"
    );
    Ok(TimesReport::from_times(&times))
}

/// Schedule-aware travel time from `source` to `target` over raw matrices.
///
/// Returns `Ok(None)` when the target cannot be reached.
pub fn travel_time(
    source: StationId,
    target: StationId,
    start_time: Minutes,
    lengths: &[Vec<Minutes>],
    first: &[Vec<Minutes>],
    freq: &[Vec<Minutes>],
) -> Result<Option<Minutes>> {
    let network = TransitNetwork::from_matrices(lengths, first, freq)?;
    travel_time_with(&network, &TravelRequest::new(source, target, start_time))
}

/// Travel time for a request against an already validated network.
pub fn travel_time_with(
    network: &TransitNetwork,
    request: &TravelRequest,
) -> Result<Option<Minutes>> {
    let times = run_request(network, request)?;
    Ok(times.time_to(request.target))
}

/// Plan a journey, returning the station path and per-leg breakdown.
pub fn plan_travel(network: &TransitNetwork, request: &TravelRequest) -> Result<TravelPlan> {
    let times = run_request(network, request)?;
    let stations = times.path_to(request.target).unwrap_or_default();
    let legs = build_legs(network, &times, &stations, request.start_time)?;

    info!(
        source = request.source,
        target = request.target,
        total = ?times.time_to(request.target),
        hops = legs.len(),
        "planned travel"
    );

    Ok(TravelPlan {
        mode: request.mode,
        clock: request.clock,
        source: request.source,
        target: request.target,
        start_time: request.start_time,
        total: times.time_to(request.target),
        stations,
        legs,
    })
}

fn run_request(network: &TransitNetwork, request: &TravelRequest) -> Result<ShortestTimes> {
    network.check_station("source", request.source)?;
    network.check_station("target", request.target)?;
    search(
        network,
        request.source,
        &request.options(),
        request.mode.edge_cost(),
    )
}

fn build_legs(
    network: &TransitNetwork,
    times: &ShortestTimes,
    stations: &[StationId],
    start_time: Minutes,
) -> Result<Vec<Leg>> {
    let mut legs = Vec::with_capacity(stations.len().saturating_sub(1));
    for pair in stations.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (Some(left), Some(reached)) = (times.time_to(from), times.time_to(to)) else {
            continue;
        };
        let ride = network.edge(from, to).map_or(0, |edge| edge.length);
        let ready_at = start_time
            .checked_add(left)
            .ok_or(Error::TimeOverflow { station: from })?;
        let arrive_at = start_time
            .checked_add(reached)
            .ok_or(Error::TimeOverflow { station: to })?;
        legs.push(Leg {
            from,
            to,
            ready_at,
            wait: reached - left - ride,
            ride,
            arrive_at,
        });
    }
    Ok(legs)
}
