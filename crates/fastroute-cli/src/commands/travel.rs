//! Travel command handler for timetable-aware journeys between two stations.

use anyhow::Result;
use clap::ValueEnum;

use fastroute_lib::{
    plan_travel, ClockModel, Minutes, RouteMode, StationId, TransitNetwork, TravelRequest,
    TravelSummary,
};

use crate::commands::friendly_error;
use crate::output::OutputFormat;

/// Clock model accepted by `--clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ClockArg {
    /// Look departures up at the traveller's arrival time at each station.
    #[default]
    PerStation,
    /// Reproduce the historical shared running clock.
    Shared,
}

impl From<ClockArg> for ClockModel {
    fn from(value: ClockArg) -> Self {
        match value {
            ClockArg::PerStation => ClockModel::PerStation,
            ClockArg::Shared => ClockModel::Shared,
        }
    }
}

/// Arguments for the travel command.
#[derive(Debug, Clone)]
pub struct TravelCommandArgs {
    /// Starting station.
    pub from: StationId,
    /// Destination station.
    pub to: StationId,
    /// Minutes from the service epoch at which the traveller is ready.
    pub start: Minutes,
    /// Clock model for departure lookups.
    pub clock: ClockArg,
    /// Ride lengths only, ignoring waits.
    pub ignore_schedule: bool,
}

impl TravelCommandArgs {
    /// Convert CLI args to a library request.
    pub fn to_request(&self) -> TravelRequest {
        let mode = if self.ignore_schedule {
            RouteMode::Static
        } else {
            RouteMode::Scheduled
        };
        TravelRequest::new(self.from, self.to, self.start)
            .with_clock(self.clock.into())
            .with_mode(mode)
    }
}

/// Handle the travel subcommand.
pub fn handle_travel_command(
    network: &TransitNetwork,
    format: OutputFormat,
    args: &TravelCommandArgs,
) -> Result<()> {
    let request = args.to_request();
    let plan = plan_travel(network, &request).map_err(friendly_error)?;
    if plan.total.is_none() {
        tracing::warn!(from = args.from, to = args.to, "destination is unreachable");
    }

    let summary = TravelSummary::from_plan(plan);
    print!("{}", format.render_travel(&summary)?);
    Ok(())
}
