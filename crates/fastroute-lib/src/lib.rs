//! fastroute library entry points.
//!
//! This crate validates transit networks given as adjacency matrices and runs
//! shortest-time searches over them, either with fixed ride lengths or with
//! timetable-aware waits at every station. Higher-level consumers (the CLI,
//! tests, benchmarks) should only depend on the functions exported here.

pub mod error;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod sample;
pub mod schedule;

pub use error::{Error, Result};
pub use network::{Edge, Matrix, Minutes, StationId, TransitNetwork};
pub use output::{ReportMode, StationTime, TimesReport, TravelSummary, TIMES_REPORT_HEADER};
pub use path::{
    next_to_finalize, search, ClockModel, EdgeCost, ScheduledCost, SearchOptions, ShortestTimes,
    StaticCost,
};
pub use routing::{
    plan_travel, shortest_time, shortest_times, travel_time, travel_time_with, Leg, RouteMode,
    TravelPlan, TravelRequest,
};
pub use schedule::wait_time;
